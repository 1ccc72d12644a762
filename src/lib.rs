// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Omvian SDK: reads the `version.json` that ships alongside the SDK.

pub mod models;
pub mod services;

pub use models::version::{VersionInfo, SDK_VERSION};
pub use services::version::{get_version, VersionError};
