use crate::config::toml_config::{LockableConfig, ScenarioConfig};
use crate::config::ReportFormat;
use crate::core::car::Car;
use crate::core::house::House;
use crate::core::report::{JsonFormatter, PlainTextFormatter};
use crate::core::security::SecurityService;
use crate::core::{Door, ReportFormatter, SharedLockable, Window};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::rc::Rc;

/// Houses, cars and the service tracking all of their doors and windows.
#[derive(Debug)]
pub struct Scenario {
    pub houses: Vec<House>,
    pub cars: Vec<Car>,
    pub service: SecurityService,
}

fn formatter_for(format: ReportFormat, pretty: bool) -> Box<dyn ReportFormatter> {
    match format {
        ReportFormat::Text => Box::new(PlainTextFormatter),
        ReportFormat::Json => Box::new(JsonFormatter::new(pretty)),
    }
}

fn build_doors(configs: &[LockableConfig]) -> Vec<Rc<Door>> {
    configs
        .iter()
        .map(|c| Rc::new(Door::with_state(c.locked)))
        .collect()
}

impl Scenario {
    /// Builds every aggregate, validates it, then registers its items with the
    /// service in declaration order (houses first, then cars).
    pub fn build(config: &ScenarioConfig) -> Result<Self> {
        let mut service = SecurityService::with_formatter(
            config.report.name.clone(),
            formatter_for(config.report.format, config.report.pretty.unwrap_or(true)),
        )?;

        let mut houses = Vec::with_capacity(config.houses.len());
        for house_config in &config.houses {
            let mut house = House::new(house_config.name.clone())?;
            for door in build_doors(&house_config.doors) {
                house.add_door(door);
            }
            for window in &house_config.windows {
                house.add_window(Rc::new(Window::with_state(window.locked)));
            }
            house.validate()?;

            service.add_lockables(house.get_doors().into_iter().map(|d| d as SharedLockable));
            service.add_lockables(
                house
                    .get_windows()
                    .into_iter()
                    .map(|w| w as SharedLockable),
            );
            houses.push(house);
        }

        let mut cars = Vec::with_capacity(config.cars.len());
        for car_config in &config.cars {
            let mut car = Car::new(car_config.name.clone())?;
            for door in build_doors(&car_config.doors) {
                car.add_door(door)?;
            }
            car.validate()?;

            service.add_lockables(car.get_doors().into_iter().map(|d| d as SharedLockable));
            cars.push(car);
        }

        tracing::info!(
            "📋 Scenario '{}' ready: {} house(s), {} car(s), {} tracked item(s)",
            service.report_name(),
            houses.len(),
            cars.len(),
            service.len()
        );

        Ok(Self {
            houses,
            cars,
            service,
        })
    }

    pub fn set_format(&mut self, format: ReportFormat, pretty: bool) {
        self.service.set_formatter(formatter_for(format, pretty));
    }

    pub fn report(&self) -> String {
        self.service.check_security()
    }
}
