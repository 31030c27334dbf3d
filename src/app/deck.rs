use anyhow::Result;

use crate::domain::FormDefinition;
use crate::registry::FormRegistry;

use super::{options::UiOptions, runtime::App};

/// Entry point for the interactive form builder.
///
/// The registry is plain data owned by the caller: hand one in, run the
/// session, get it back with whatever the user built and submitted.
#[derive(Debug, Default)]
pub struct FormDeck {
    registry: FormRegistry,
    options: UiOptions,
}

impl FormDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: FormRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a definition to the session registry before the UI starts.
    pub fn preload(mut self, definition: FormDefinition) -> Self {
        self.registry.insert(definition);
        self
    }

    pub fn run(self) -> Result<FormRegistry> {
        App::new(self.registry, self.options).run()
    }
}
