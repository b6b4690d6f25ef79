//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons so components never name
//! a concrete glyph directly.

use icondata::Icon;

/// App logo shown in the shell header.
pub const LOGO: Icon = icondata::BsChatDots;

/// Dropdown trigger chevron.
pub const CHEVRON_DOWN: Icon = icondata::BsChevronDown;

/// Status line acknowledgment mark.
pub const CHECK: Icon = icondata::BsCheckLg;

/// Shown on the device-compatibility overlay.
pub const PHONE: Icon = icondata::BsPhone;
