use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// A static description of a chat agent.
///
/// The record is immutable once built, and is handed to the agent runtime
/// at process start. The runtime uses it to assemble outbound model
/// requests; this crate never interprets the fields itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentDescriptor {
    id: String,
    name: String,
    instructions: String,
    model: String,
}

impl AgentDescriptor {
    /// Returns the stable identifier of the agent.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable name of the agent.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the system instructions of the agent.
    #[inline]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Returns the model reference, a `provider/model` pair.
    ///
    /// The reference is opaque to this crate. Resolving it to a concrete
    /// endpoint is the runtime's job.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// [`AgentDescriptor`] builder.
pub struct AgentDescriptorBuilder {
    id: String,
    name: Option<String>,
    instructions: Option<String>,
    model: Option<String>,
}

impl AgentDescriptorBuilder {
    /// Creates a new builder with the specified agent identifier.
    #[inline]
    pub fn with_id<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            name: None,
            instructions: None,
            model: None,
        }
    }

    /// Sets the human-readable name.
    #[inline]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the system instructions.
    #[inline]
    pub fn with_instructions<S: Into<String>>(
        mut self,
        instructions: S,
    ) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Sets the model reference.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Builds the descriptor.
    ///
    /// Every field must be set and non-empty. Values are stored as-is,
    /// with no trimming or normalization applied.
    pub fn build(self) -> Result<AgentDescriptor, Error> {
        if self.id.is_empty() {
            return Err(Error::new("id", ErrorKind::EmptyField));
        }

        let id = self.id;
        let name = require_non_empty("name", self.name)?;
        let instructions =
            require_non_empty("instructions", self.instructions)?;
        let model = require_non_empty("model", self.model)?;

        Ok(AgentDescriptor {
            id,
            name,
            instructions,
            model,
        })
    }
}

fn require_non_empty(
    field: &'static str,
    value: Option<String>,
) -> Result<String, Error> {
    match value {
        None => Err(Error::new(field, ErrorKind::MissingField)),
        Some(value) if value.is_empty() => {
            Err(Error::new(field, ErrorKind::EmptyField))
        }
        Some(value) => Ok(value),
    }
}
