//! This crate contains all shared UI for the workspace.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`validation`] | Signup form rules and their messages |
//! | [`registration`] | Mapping failed registrations to user-facing messages |
//! | [`render`] | Pure view models for the dashboard |
//! | [`controllers`] | Login, signup and dashboard page logic |
//! | [`components`] | Dioxus components that draw the view models |
//! | [`services`] | The API client, session store and dialogs shared through context |

pub mod browser;
pub mod components;
pub mod controllers;
pub mod registration;
pub mod render;
pub mod services;
pub mod validation;

pub use browser::{Browser, WebBrowser};
pub use controllers::{
    paths, ActionOutcome, DashboardController, LoginController, LoginOutcome, NewTaskForm,
    NewUserForm, SignupController, SignupOutcome,
};
pub use registration::RegistrationFailure;
pub use services::{use_services, AppServices, PlatformStore, ServicesProvider};
pub use validation::{PasswordPolicy, SignupForm, ValidationError};
