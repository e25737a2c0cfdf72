use crate::core::{Door, Window};
use crate::utils::error::Result;
use crate::utils::validation::{validate_cardinality, validate_non_empty_string, Validate};
use std::rc::Rc;

/// A house with any number of doors and windows.
///
/// The `1..*` lower bound on both is only checked by [`Validate::validate`].
#[derive(Debug)]
pub struct House {
    name: String,
    doors: Vec<Rc<Door>>,
    windows: Vec<Rc<Window>>,
}

impl House {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_non_empty_string("house.name", &name)?;

        tracing::debug!("🏠 Created house '{}'", name);
        Ok(Self {
            name,
            doors: Vec::new(),
            windows: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_door(&mut self, door: Rc<Door>) {
        self.doors.push(door);
        tracing::debug!("House '{}' now has {} door(s)", self.name, self.doors.len());
    }

    pub fn add_window(&mut self, window: Rc<Window>) {
        self.windows.push(window);
        tracing::debug!(
            "House '{}' now has {} window(s)",
            self.name,
            self.windows.len()
        );
    }

    /// Snapshot of the current doors; later additions are not reflected.
    pub fn get_doors(&self) -> Vec<Rc<Door>> {
        self.doors.clone()
    }

    /// Snapshot of the current windows; later additions are not reflected.
    pub fn get_windows(&self) -> Vec<Rc<Window>> {
        self.windows.clone()
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Validate for House {
    fn validate(&self) -> Result<()> {
        let entity = format!("House '{}'", self.name);
        validate_cardinality(&entity, "doors", self.doors.len(), 1, None)?;
        validate_cardinality(&entity, "windows", self.windows.len(), 1, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Lockable;
    use crate::utils::error::SecurityError;

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            House::new(""),
            Err(SecurityError::InvalidArgument { .. })
        ));
        assert!(House::new("  ").is_err());
    }

    #[test]
    fn test_snapshot_does_not_follow_later_additions() {
        let mut house = House::new("Main St").unwrap();
        house.add_door(Rc::new(Door::new()));
        house.add_window(Rc::new(Window::new()));

        let doors = house.get_doors();
        let windows = house.get_windows();

        house.add_door(Rc::new(Door::new()));
        house.add_window(Rc::new(Window::new()));
        house.add_window(Rc::new(Window::new()));

        assert_eq!(doors.len(), 1);
        assert_eq!(windows.len(), 1);
        assert_eq!(house.get_doors().len(), 2);
        assert_eq!(house.get_windows().len(), 3);
    }

    #[test]
    fn test_snapshot_shares_lock_state() {
        let mut house = House::new("Main St").unwrap();
        let door = Rc::new(Door::new());
        house.add_door(Rc::clone(&door));

        door.lock();
        assert!(house.get_doors()[0].is_locked());
    }

    #[test]
    fn test_lower_bound_checked_on_validate() {
        let mut house = House::new("Main St").unwrap();
        assert!(!house.is_complete());

        house.add_door(Rc::new(Door::new()));
        let err = house.validate().unwrap_err();
        assert!(matches!(err, SecurityError::ConstraintViolation { .. }));
        assert!(err.to_string().contains("windows"));

        house.add_window(Rc::new(Window::new()));
        assert!(house.validate().is_ok());
        assert!(house.is_complete());
    }
}
