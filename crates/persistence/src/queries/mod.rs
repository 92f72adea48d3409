// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `directory` resolves principals, vehicles and catalog items
//! - `appointments` loads appointments and computes dashboard aggregates

pub mod appointments;
pub mod directory;
