use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info, warn};

use canopy::namespace::NameError;
use canopy::{Namespace, NamespaceSeed, SeedError};

use crate::application::{CommandOutput, RuntimeConfig};
use crate::cli::Addition;

pub struct Application;

impl Application {
    pub async fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();

        let mut namespace = Self::load_namespace(&runtime_config).await?;
        Self::apply_additions(&mut namespace, &runtime_config.additions);

        debug!("Running command {:?}", runtime_config.command);
        CommandOutput::from_command(&namespace, &runtime_config.command).print();

        Ok(())
    }

    async fn load_namespace(runtime_config: &RuntimeConfig) -> Result<Namespace, ApplicationError> {
        match &runtime_config.seed {
            Some(path) => {
                let seed = NamespaceSeed::read(path).await.context(SeedSnafu)?;
                let namespace = seed.build().context(SeedSnafu)?;
                info!(
                    "Loaded namespace '{}' with {} nodes from {}",
                    namespace.root_name(),
                    namespace.len(),
                    path.display()
                );
                Ok(namespace)
            }
            None => {
                debug!(
                    "No seed file given, starting from an empty '{}' folder",
                    runtime_config.root_name
                );
                Namespace::new(runtime_config.root_name.as_str()).context(RootSnafu)
            }
        }
    }

    /// Inserts each addition in order. Rejected ones are reported and skipped.
    pub fn apply_additions(namespace: &mut Namespace, additions: &[Addition]) -> usize {
        additions
            .iter()
            .filter(|addition| {
                match namespace.insert(&addition.parent, &addition.name, addition.kind) {
                    Ok(id) => {
                        info!(
                            "Added {} {}",
                            addition.kind,
                            namespace.absolute_path(id)
                        );
                        true
                    }
                    Err(err) => {
                        warn!(
                            "Skipping {} '{}' under '{}': {}",
                            addition.kind, addition.name, addition.parent, err
                        );
                        false
                    }
                }
            })
            .count()
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the seed file"))]
    SeedError { source: SeedError },
    #[snafu(display("Critical failure encountered while creating the root folder"))]
    RootError { source: NameError },
}
