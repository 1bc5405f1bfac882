// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

mod color;
mod label;

pub use self::color::Pulse;
pub use self::label::render_label;
