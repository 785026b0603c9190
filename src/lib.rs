/* ************************************************************************ **
** This file is part of glspan, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Facade over the glspan subcrates.
//!
//! Most users want `glspan::*` (or the `vee`/`mat` free-function modules)
//! and nothing else; the subcrates exist so that the comparator can be
//! depended on by test suites without dragging the linalg types along.

pub use glspan_linalg::*;

pub use glspan_assert_close::{assert_close, debug_assert_close};
