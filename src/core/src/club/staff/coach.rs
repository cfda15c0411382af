use crate::club::{Person, PersonAttributes};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coach {
    attributes: PersonAttributes,
    experience_years: u32,
}

impl Coach {
    pub fn new(name: impl Into<String>, age: u32, experience_years: u32) -> Self {
        Coach {
            attributes: PersonAttributes::new(name, age),
            experience_years,
        }
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }
}

impl Person for Coach {
    fn attributes(&self) -> &PersonAttributes {
        &self.attributes
    }
}

impl Display for Coach {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}, Experience: {} years",
            self.attributes, self.experience_years
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coach_display_includes_experience() {
        let coach = Coach::new("Darren", 52, 18);

        assert_eq!("Darren", coach.name());
        assert_eq!(52, coach.age());
        assert_eq!(18, coach.experience_years());
        assert_eq!("Name: Darren, Age: 52, Experience: 18 years", coach.to_string());
    }
}
