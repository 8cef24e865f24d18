//! # Image Optimizer Orchestrator
//!
//! Holds the ordered registry of descriptors and runs the applicable ones
//! on an image, one after the other.

use crate::{
    error::OptimizeError,
    logger::{DiscardLogger, OptimizerLogger},
    media_type,
    optimizers::{Jpegoptim, Optimizer, Pngquant},
    process::{ExecutionResult, ProcessRunner, SystemProcessRunner},
    utils::display_command,
};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Applies external optimizers to images based on their media type.
///
/// Registration order is execution order. A failing tool is logged and the
/// next matching tool still runs.
///
/// ```rust,no_run
/// use image_optimizer::{ImageOptimizer, TracingLogger};
///
/// # async fn demo() -> Result<(), image_optimizer::OptimizeError> {
/// let mut optimizer = ImageOptimizer::new();
/// optimizer.use_logger(TracingLogger);
/// optimizer.optimize("photo.jpg").await?;
/// # Ok(())
/// # }
/// ```
pub struct ImageOptimizer {
    optimizers: Vec<Box<dyn Optimizer>>,
    logger: Arc<dyn OptimizerLogger>,
    runner: Arc<dyn ProcessRunner>,
}

impl ImageOptimizer {
    /// Orchestrator with [`Jpegoptim`] and [`Pngquant`] registered, a
    /// [`DiscardLogger`] and the system process runner.
    pub fn new() -> Self {
        let mut optimizer = Self::empty();
        optimizer.add_optimizer(Jpegoptim::new()).add_optimizer(Pngquant::new());
        optimizer
    }

    /// Orchestrator with an empty registry.
    pub fn empty() -> Self {
        Self {
            optimizers: Vec::new(),
            logger: Arc::new(DiscardLogger),
            runner: Arc::new(SystemProcessRunner),
        }
    }

    /// Appends a descriptor. Duplicates are kept and each runs.
    pub fn add_optimizer<O: Optimizer + 'static>(&mut self, optimizer: O) -> &mut Self {
        self.optimizers.push(Box::new(optimizer));
        self
    }

    /// Appends an already boxed descriptor.
    pub fn add_boxed_optimizer(&mut self, optimizer: Box<dyn Optimizer>) -> &mut Self {
        self.optimizers.push(optimizer);
        self
    }

    /// Replaces the whole registry, keeping the given order.
    pub fn set_optimizers<I>(&mut self, optimizers: I) -> &mut Self
    where
        I: IntoIterator<Item = Box<dyn Optimizer>>,
    {
        self.optimizers.clear();
        for optimizer in optimizers {
            self.add_boxed_optimizer(optimizer);
        }
        self
    }

    pub fn use_logger<L: OptimizerLogger + 'static>(&mut self, logger: L) -> &mut Self {
        self.logger = Arc::new(logger);
        self
    }

    pub fn use_process_runner<R: ProcessRunner + 'static>(&mut self, runner: R) -> &mut Self {
        self.runner = Arc::new(runner);
        self
    }

    /// Registered descriptors in execution order.
    pub fn optimizers(&self) -> &[Box<dyn Optimizer>] {
        &self.optimizers
    }

    /// One line per registered descriptor, in execution order:
    /// `name: binary flags [media/type, ...]`.
    pub fn describe_optimizers(&self) -> Vec<String> {
        self.optimizers
            .iter()
            .map(|optimizer| {
                let template = optimizer.template();
                let command = std::iter::once(template.binary())
                    .chain(template.args().iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    "{}: {} [{}]",
                    optimizer.name(),
                    command,
                    optimizer.media_types().join(", ")
                )
            })
            .collect()
    }

    /// Descriptors that accept `media_type`, in registration order.
    pub fn applicable_optimizers(&self, media_type: &str) -> Vec<&dyn Optimizer> {
        self.optimizers
            .iter()
            .map(|optimizer| &**optimizer)
            .filter(|optimizer| optimizer.can_handle(media_type))
            .collect()
    }

    /// Runs every applicable optimizer on the image at `image_path`.
    ///
    /// Subprocess failures are only logged. An image whose media type no
    /// descriptor accepts is a no-op.
    ///
    /// # Errors
    /// - [`OptimizeError::FileAccess`] if the file cannot be read; nothing
    ///   is executed in that case
    /// - [`OptimizeError::Configuration`] if a command cannot be built for
    ///   the path (empty path)
    pub async fn optimize(&self, image_path: impl AsRef<Path>) -> Result<(), OptimizeError> {
        let image_path = image_path.as_ref();
        self.logger
            .info(&format!("start optimizing {}", image_path.display()));

        let media_type = media_type::detect(image_path).await?;

        let applicable = self.applicable_optimizers(&media_type);
        if applicable.is_empty() {
            debug!("No optimizer registered for {} ({})", image_path.display(), media_type);
            return Ok(());
        }

        for optimizer in applicable {
            let command = optimizer.bind(image_path).build_command()?;

            self.logger
                .info(&format!("Executing `{}`", display_command(&command)));

            let result = self.runner.run(&command).await;
            self.log_result(&result);
        }

        Ok(())
    }

    /// Optimizes every path in order and returns how many of them failed.
    ///
    /// A failing path is reported through the logger and does not stop the
    /// batch.
    pub async fn optimize_all<P: AsRef<Path>>(&self, image_paths: &[P]) -> usize {
        let mut failures = 0;
        for image_path in image_paths {
            if let Err(e) = self.optimize(image_path).await {
                self.logger.error(&e.to_string());
                failures += 1;
            }
        }
        failures
    }

    fn log_result(&self, result: &ExecutionResult) {
        if result.success {
            self.logger.info(&format!(
                "Process successfully ended with output `{}`",
                result.stdout
            ));
        } else {
            self.logger
                .error(&format!("Process errored with `{}`", result.stderr));
        }
    }
}

impl Default for ImageOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ImageOptimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageOptimizer")
            .field(
                "optimizers",
                &self.optimizers.iter().map(|o| o.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
