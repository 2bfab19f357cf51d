//! sqlx integration for PostgreSQL
//!
//! Lets [`StringList`] and [`MapList`] be bound and fetched directly through
//! sqlx. Map lists travel as JSONB, string lists as comma-joined TEXT.
//! Fetching a NULL column yields an empty collection, the same as
//! [`ColumnType::from_db_value`](crate::ColumnType::from_db_value).
//!
//! The string list binding does not follow
//! [`ColumnType::db_data_type`](crate::ColumnType::db_data_type), which
//! reports `JSONB` for Postgres. A string list column read and written
//! through sqlx must be declared `TEXT`; a `JSONB` column rejects the
//! comma-joined value on bind and is reported incompatible on fetch.

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::types::Json;
use sqlx::{Decode, Encode, Postgres, Type, ValueRef};

use crate::map_list::{JsonMap, MapList};
use crate::string_list::StringList;
use crate::traits::ColumnType;

impl Type<Postgres> for StringList {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for StringList {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <String as Encode<Postgres>>::encode(self.joined(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for StringList {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Self::new());
        }
        let text = <&str as Decode<Postgres>>::decode(value)?;
        Ok(Self::from_db_value(text.into())?)
    }
}

impl Type<Postgres> for MapList {
    fn type_info() -> PgTypeInfo {
        <Json<JsonMap> as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <Json<JsonMap> as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for MapList {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <Json<&Vec<JsonMap>> as Encode<Postgres>>::encode(Json(&self.0), buf)
    }
}

impl<'r> Decode<'r, Postgres> for MapList {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Self::new());
        }
        let Json(maps) = <Json<Option<MapList>> as Decode<Postgres>>::decode(value)?;
        Ok(maps.unwrap_or_default())
    }
}
