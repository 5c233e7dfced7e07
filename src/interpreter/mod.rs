//! Turns command lines into registry operations and renders the outcome as
//! text. Nothing here fails outward: every rejection becomes a message.

mod command;
pub mod error;
mod price;

pub use command::*;
pub use error::*;
pub use price::*;

use tracing::{debug, instrument};

use crate::registry::Registry;

pub struct CommandInterpreter {
    registry: Registry,
    prices: PriceParser,
}

impl CommandInterpreter {
    pub fn new(prices: PriceParser) -> Self {
        Self {
            registry: Registry::new(),
            prices,
        }
    }

    #[allow(dead_code)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs one line and returns the lines to show the user.
    ///
    /// Blank input produces no output. Argument problems are reported before
    /// anything is changed.
    #[instrument(skip(self))]
    pub fn execute(&mut self, line: &str) -> Vec<String> {
        match Command::parse(line, &self.prices) {
            Ok(Some(command)) => self.apply(command),
            Ok(None) => Vec::new(),
            Err(e) => {
                debug!(error = %e, "Command rejected");
                let mut lines = vec![e.to_string()];
                if let CommandError::IncorrectArguments { usage } = e {
                    lines.push(format!("Usage: {}", usage));
                }
                lines
            }
        }
    }

    fn apply(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Help => HELP.iter().map(|line| line.to_string()).collect(),
            Command::AddOwner(draft) => {
                let name = draft.name.clone();
                match self.registry.add_owner(draft) {
                    Ok(id) => vec![format!("Owner {} added successfully with ID {}!", name, id)],
                    Err(e) => vec![e.to_string()],
                }
            }
            Command::DelOwner(owner_id) => match self.registry.remove_owner_cascading(owner_id) {
                Ok(_) => vec![format!("Owner {} removed successfully!", owner_id)],
                Err(e) => vec![
                    e.to_string(),
                    "Failed to remove owner. Owner not found.".to_string(),
                ],
            },
            Command::AddProp(draft) => match self.registry.add_property(draft) {
                Ok(id) => vec![format!("Property with ID {} has been successfully added!", id)],
                Err(e) => vec![e.to_string(), "Failed to add property.".to_string()],
            },
            Command::DelProp(property_id) => match self.registry.remove_property(property_id) {
                Ok(()) => vec![format!("Property {} removed successfully!", property_id)],
                Err(e) => vec![
                    e.to_string(),
                    "A property with this id has not been found.".to_string(),
                ],
            },
            Command::PrintOwners => self.registry.display_owners(),
            Command::PrintProps(filter) => self.registry.display_properties(&filter),
        }
    }
}
