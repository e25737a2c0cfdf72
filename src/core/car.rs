use crate::core::Door;
use crate::utils::error::{Result, SecurityError};
use crate::utils::validation::{validate_cardinality, validate_non_empty_string, Validate};
use std::rc::Rc;

pub const MIN_CAR_DOORS: usize = 2;
pub const MAX_CAR_DOORS: usize = 4;

/// A car with 2..=4 doors. The upper bound is enforced on every
/// [`Car::add_door`]; the lower bound only by [`Validate::validate`].
#[derive(Debug)]
pub struct Car {
    name: String,
    doors: Vec<Rc<Door>>,
}

impl Car {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_non_empty_string("car.name", &name)?;

        tracing::debug!("🚗 Created car '{}'", name);
        Ok(Self {
            name,
            doors: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_door(&mut self, door: Rc<Door>) -> Result<()> {
        if self.doors.len() >= MAX_CAR_DOORS {
            tracing::warn!(
                "⚠️ Rejected door for car '{}': already has {} doors",
                self.name,
                self.doors.len()
            );
            return Err(SecurityError::constraint_violation(
                &format!("Car '{}'", self.name),
                format!("cannot have more than {} doors", MAX_CAR_DOORS),
            ));
        }

        self.doors.push(door);
        tracing::debug!("Car '{}' now has {} door(s)", self.name, self.doors.len());
        Ok(())
    }

    /// Snapshot of the current doors; later additions are not reflected.
    pub fn get_doors(&self) -> Vec<Rc<Door>> {
        self.doors.clone()
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Validate for Car {
    fn validate(&self) -> Result<()> {
        validate_cardinality(
            &format!("Car '{}'", self.name),
            "doors",
            self.doors.len(),
            MIN_CAR_DOORS,
            Some(MAX_CAR_DOORS),
        )
    }
}
