//! Platform identifiers and trait classification
//!
//! The platform set is closed: every supported identifier is a variant of
//! [`Platform`], and classification is a pure, total function over it.
//! Traits never depend on per-target state, so they may be cached and shared
//! across concurrent resolution passes.

use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported target platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Win64,
    Win32,
    Mac,
    Linux,
    Ios,
    Android,
    Ps4,
    XboxOne,
    WinRt,
    WinRtArm,
    Html5,
}

/// Derived per-platform traits, read-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformTraits {
    /// Desktop platform (windowed OS with a user filesystem)
    pub is_desktop: bool,
    /// Console-family platform (fixed hardware, packaged deployment)
    pub is_console_family: bool,
    /// Whether separately loadable binaries can be produced at all
    pub supports_modular_link: bool,
}

impl Platform {
    /// All supported platforms, in canonical order
    pub const ALL: [Platform; 11] = [
        Platform::Win64,
        Platform::Win32,
        Platform::Mac,
        Platform::Linux,
        Platform::Ios,
        Platform::Android,
        Platform::Ps4,
        Platform::XboxOne,
        Platform::WinRt,
        Platform::WinRtArm,
        Platform::Html5,
    ];

    /// Classify this platform into its derived traits
    pub fn traits(&self) -> PlatformTraits {
        let is_desktop = matches!(
            self,
            Self::Win64 | Self::Win32 | Self::Mac | Self::Linux
        );
        let is_console_family = matches!(
            self,
            Self::Ps4 | Self::XboxOne | Self::WinRt | Self::WinRtArm
        );

        PlatformTraits {
            is_desktop,
            is_console_family,
            // Modular linking needs a runtime loader for engine modules,
            // which only the desktop platforms provide.
            supports_modular_link: is_desktop,
        }
    }

    /// Platforms that always take the game-folder output redirection when
    /// linking monolithically, even though they report as non-console
    /// desktop variants in other respects
    pub fn always_redirects_output(&self) -> bool {
        matches!(self, Self::WinRt | Self::WinRtArm)
    }

    /// Directory name for this platform under a `Binaries/` root
    pub fn binaries_subdir(&self) -> &'static str {
        match self {
            Self::Win64 => "Win64",
            Self::Win32 => "Win32",
            Self::Mac => "Mac",
            Self::Linux => "Linux",
            Self::Ios => "IOS",
            Self::Android => "Android",
            Self::Ps4 => "PS4",
            Self::XboxOne => "XboxOne",
            Self::WinRt => "WinRT",
            Self::WinRtArm => "WinRT",
            Self::Html5 => "HTML5",
        }
    }

    /// File extension for executables on this platform, including the dot
    pub fn executable_extension(&self) -> &'static str {
        match self {
            Self::Win64 | Self::Win32 | Self::WinRt | Self::WinRtArm => ".exe",
            Self::Mac => ".app",
            Self::Ps4 => ".self",
            Self::XboxOne => ".exe",
            Self::Html5 => ".js",
            Self::Linux | Self::Ios | Self::Android => "",
        }
    }
}

impl FromStr for Platform {
    type Err = BuildError;

    fn from_str(s: &str) -> BuildResult<Self> {
        match s.to_lowercase().as_str() {
            "win64" => Ok(Self::Win64),
            "win32" => Ok(Self::Win32),
            "mac" => Ok(Self::Mac),
            "linux" => Ok(Self::Linux),
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "ps4" => Ok(Self::Ps4),
            "xboxone" => Ok(Self::XboxOne),
            "winrt" => Ok(Self::WinRt),
            "winrt-arm" | "winrtarm" => Ok(Self::WinRtArm),
            "html5" => Ok(Self::Html5),
            other => Err(BuildError::unknown_platform(other)),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Win64 => "Win64",
            Self::Win32 => "Win32",
            Self::Mac => "Mac",
            Self::Linux => "Linux",
            Self::Ios => "IOS",
            Self::Android => "Android",
            Self::Ps4 => "PS4",
            Self::XboxOne => "XboxOne",
            Self::WinRt => "WinRT",
            Self::WinRtArm => "WinRT-ARM",
            Self::Html5 => "HTML5",
        };
        write!(f, "{}", name)
    }
}
