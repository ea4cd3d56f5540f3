//! A record whose fields only accept valid values.
//!
//! Run with `RUST_LOG=matchkit_validation=debug` to see rejected writes.

use anyhow::Result;
use matchkit::prelude::*;
use matchkit_validation::Validated;
use std::fmt;
use tracing_subscriber::{fmt as log_fmt, prelude::*, EnvFilter};

struct Person {
    name: Validated,
    id: Validated,
}

impl Person {
    fn new() -> Result<Self> {
        let name = Validated::new("name", Module::string())?.with_adjuster(|value| match &value {
            Value::String(s) => Ok(Value::from(s.trim())),
            _ => Ok(value),
        });
        let id = Validated::new("id", or![nil(), and![Module::integer(), 1..=100]?]?)?;
        Ok(Self { name, id })
    }
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<Person {:?}, {:?}>", self.name, self.id)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(log_fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env())
        .init();

    let mut person = Person::new()?;
    person.name.set(" Ken ")?;
    println!("{person:?}");

    for rejected in [Value::Integer(8), Value::Nil] {
        if let Err(err) = person.name.set(rejected) {
            println!("name: {err}");
        }
    }

    person.id.set(Value::Nil)?;
    for rejected in [Value::from("fail"), Value::Integer(101), Value::Float(99.9)] {
        if let Err(err) = person.id.set(rejected) {
            println!("id: {err}");
        }
    }
    person.id.set(100)?;
    println!("{person:?}");
    Ok(())
}
