//! Factory Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Factory
//! workspace generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           factory-cli (CLI)             │
//! │   (loads Config, picks the adapters)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ ProjectService → Hydrator, LineAppender │
//! │           DependencyInjector            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Filesystem, TemplateStore)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     factory-adapters (Infrastructure)   │
//! │ (LocalFilesystem, InMemoryStore, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Config, TemplateBundle, code lines,   │
//! │           GenerationPlan)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use factory_core::prelude::*;
//!
//! # fn run(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>, config: Config)
//! # -> FactoryResult<()> {
//! let service = ProjectService::new(store, filesystem);
//! let project = service.create_project(&config)?;
//! println!("generated into {}", project.dir.display());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratedProject, ProjectService,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        ComponentExports, Config, FileContent, GenerationPlan, Package, RelativePath, RenderContext, Step,
        TemplateBundle, TemplateName, TemplateSpec,
    };
    pub use crate::error::{FactoryError, FactoryResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
