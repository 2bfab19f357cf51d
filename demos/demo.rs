//! Walks a string list and a map list through every representation
//!
//! Run with: cargo run --example demo

use serde_json::json;
use storetypes::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tags = StringList::from(vec!["rust", "database", "json"]);
    let attachments = MapList::from_value(json!([
        {"name": "diagram.png", "bytes": 48213},
        {"name": "notes.md", "bytes": 912, "draft": true}
    ]))?;

    println!("=== Storage scalars ===");
    println!("tags        -> {:?}", tags.to_db_value()?);
    println!("attachments -> {:?}", attachments.to_db_value()?);
    println!("absent      -> {:?}", None::<MapList>.to_db_value()?);

    println!("\n=== Column types per dialect ===");
    for name in ["sqlite", "mysql", "postgres", "sqlserver", "oracle"] {
        let dialect = Dialect::from(name);
        println!(
            "{:<10} {}",
            dialect.name(),
            MapList::db_data_type(&dialect).unwrap_or("<framework default>")
        );
    }

    println!("\n=== Write expressions ===");
    let targets = [
        DialectTarget::new(Dialect::Mysql).with_server_version("8.0.31"),
        DialectTarget::new(Dialect::Mysql).with_server_version("5.5.5-10.3.1-MariaDB"),
        DialectTarget::new(Dialect::Postgres),
    ];
    for target in &targets {
        let expr = attachments.sql_expr(target)?;
        let mut counter = 1;
        println!(
            "{} {:?}: {}",
            target.dialect,
            target.server_version,
            expr.render(&target.dialect, &mut counter)
        );
    }

    println!("\n=== Reading back ===");
    let restored = StringList::from_db_value(DbValue::from("rust,database,json"))?;
    println!("tags from text  -> {:?}", restored);
    println!("tags from NULL  -> {:?}", StringList::from_db_value(DbValue::Null)?);

    let wire = String::from_utf8(attachments.to_json()?)?;
    println!("attachments JSON -> {}", wire);

    Ok(())
}
