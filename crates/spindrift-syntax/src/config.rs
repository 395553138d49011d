// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Scanner configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SyntaxError};

/// Default bound on the significant digits kept from a decimal literal.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 20;

/// Options controlling a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanOptions {
    /// Label for the source, recorded in log spans
    pub source_name: Option<String>,

    /// Significant digits kept from decimal numeric literals before rounding
    pub significant_digits: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            source_name: None,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl ScanOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Sets the significant digit bound for decimal literals.
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Checks that the options can drive a scan.
    pub fn validate(&self) -> Result<()> {
        if self.significant_digits == 0 {
            return Err(SyntaxError::InvalidOptions(
                "significant_digits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn source_label(&self) -> &str {
        self.source_name.as_deref().unwrap_or("<anonymous>")
    }
}
