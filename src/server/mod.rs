//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database access and
//! tower-sessions for cookie sessions stored in the same Sqlite database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Validation** (`validation/`) - Builders that check input before it reaches a repository
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging`) - Console and optional file tracing output
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, sessions, admin bootstrap and seeding
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs for to-do reminders and token cleanup
//! - **Seed** (`seed/`) - Loading reference data from built-in or JSON sources
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session and authenticates the caller
//! 3. **Controller** validates access, converts DTOs to builders or params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
