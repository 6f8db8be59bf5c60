//! Builds a twelve-month financial report and prints it.
//!
//! Run with `cargo run --example report`.

use sprig::{Scope, TreeBuilder, attrs};

fn main() -> sprig::Result<()> {
    let mut builder = TreeBuilder::new();

    let report = builder.build(|x| {
        x.tag("report", |x: &mut Scope| {
            x.tag("name", "Acme Widgets, FY 2026")?;
            x.tag("class", "Class of 94")?;
            for month in 1..=12 {
                x.tag("amounts", (attrs([("month", month)]), |x: &mut Scope| {
                    x.tag("expenses", month * 73 % 1000)?;
                    x.tag("revenue", month * 131 % 1000)
                }))?;
            }
            Ok(())
        })
    })?;

    println!("{report}");
    Ok(())
}
