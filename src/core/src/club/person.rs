use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonAttributes {
    pub name: String,
    pub age: u32,
}

impl PersonAttributes {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        PersonAttributes {
            name: name.into(),
            age,
        }
    }
}

impl Display for PersonAttributes {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)
    }
}

pub trait Person {
    fn attributes(&self) -> &PersonAttributes;

    fn name(&self) -> &str {
        &self.attributes().name
    }

    fn age(&self) -> u32 {
        self.attributes().age
    }
}
