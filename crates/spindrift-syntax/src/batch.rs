// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Parallel scanning of independent sources.

use rayon::prelude::*;
use tracing::debug;

use crate::config::ScanOptions;
use crate::error::Result;
use crate::lexer::Scanner;
use crate::syntax::SyntaxTree;

/// Scans several sources on the rayon thread pool.
///
/// Each source gets its own scanner and tree; the results keep the order
/// of `sources`.
pub fn scan_batch(sources: &[&[u16]], options: &ScanOptions) -> Result<Vec<SyntaxTree>> {
    options.validate()?;
    debug!(sources = sources.len(), "scanning batch");

    let trees = sources
        .par_iter()
        .map(|source| {
            // Options were validated above, so this cannot fail.
            Scanner::with_options(source, options.clone()).map(|scanner| scanner.scan())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(trees)
}
