// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `appointments` inserts, rewrites, and deletes appointments
//! - `directory` seeds principals, vehicles, and catalog items

pub mod appointments;
pub mod directory;
