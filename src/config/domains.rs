use std::{
    io,
    path::{Path, PathBuf},
};

use super::{
    ConfigPaths,
    DocumentFormat::{self, Json, Kdl},
};

/// A configuration domain the CLI knows how to find, validate and generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    /// Name of the domain, its CLI subcommand and its registry schema.
    pub name: &'static str,
    /// Display name used in section headings.
    pub title: &'static str,
    /// Well-known system location.
    pub system_path: &'static str,
    /// Location relative to the user config home.
    pub user_path: &'static str,
    /// Format assumed when the file extension does not tell.
    pub format: DocumentFormat,
    /// File name written by `generate`, if the domain is generated at all.
    pub output_file: Option<&'static str>,
    /// Whether `validate` checks this domain.
    pub validated_by_default: bool,
}

const fn domain(
    name: &'static str,
    title: &'static str,
    system_path: &'static str,
    user_path: &'static str,
    format: DocumentFormat,
    output_file: Option<&'static str>,
    validated_by_default: bool,
) -> Domain {
    Domain {
        name,
        title,
        system_path,
        user_path,
        format,
        output_file,
        validated_by_default,
    }
}

static DOMAINS: [Domain; 13] = [
    domain(
        "niri",
        "Niri",
        "/etc/niri/config.kdl",
        "niri/config.kdl",
        Kdl,
        Some("niri-config.json"),
        true,
    ),
    domain(
        "waybar",
        "Waybar",
        "/etc/xdg/waybar/config",
        "waybar/config",
        Json,
        Some("waybar-config.json"),
        true,
    ),
    domain(
        "wofi",
        "wofi",
        "/etc/xdg/wofi/config",
        "wofi/config",
        Json,
        Some("wofi-config.json"),
        true,
    ),
    domain(
        "ghostty",
        "Ghostty",
        "/etc/xdg/ghostty/config",
        "ghostty/config",
        Json,
        Some("ghostty-config.json"),
        true,
    ),
    domain(
        "desktop",
        "Desktop Environment",
        "/etc/voidance/desktop-environment.json",
        "voidance/desktop-environment.json",
        Json,
        Some("desktop-environment.json"),
        true,
    ),
    domain(
        "services",
        "System Services",
        "/etc/voidance/system-services.json",
        "voidance/system-services.json",
        Json,
        Some("system-services.json"),
        true,
    ),
    domain(
        "session",
        "Session",
        "/etc/voidance/services/session.json",
        "voidance/services/session.json",
        Json,
        Some("session-config.json"),
        false,
    ),
    domain(
        "display",
        "Display Manager",
        "/etc/voidance/services/display.json",
        "voidance/services/display.json",
        Json,
        Some("display-config.json"),
        false,
    ),
    domain(
        "network",
        "Network",
        "/etc/voidance/services/network.json",
        "voidance/services/network.json",
        Json,
        Some("network-config.json"),
        false,
    ),
    domain(
        "audio",
        "Audio",
        "/etc/voidance/services/audio.json",
        "voidance/services/audio.json",
        Json,
        Some("audio-config.json"),
        false,
    ),
    domain(
        "idle",
        "Idle Management",
        "/etc/voidance/services/idle.json",
        "voidance/services/idle.json",
        Json,
        Some("idle-config.json"),
        false,
    ),
    domain(
        "swaylock",
        "Swaylock",
        "/etc/voidance/services/swaylock.json",
        "voidance/services/swaylock.json",
        Json,
        Some("swaylock-config.json"),
        false,
    ),
    domain(
        "sway",
        "Sway",
        "/etc/voidance/sway.json",
        "voidance/sway.json",
        Json,
        None,
        false,
    ),
];

impl Domain {
    /// Every known domain, in report order.
    pub fn all() -> &'static [Domain] {
        &DOMAINS
    }

    /// Looks a domain up by name.
    pub fn find(name: &str) -> Option<&'static Domain> {
        DOMAINS.iter().find(|domain| domain.name == name)
    }

    /// Domains checked by a plain `validate`.
    pub fn validated_by_default() -> impl Iterator<Item = &'static Domain> {
        DOMAINS.iter().filter(|domain| domain.validated_by_default)
    }

    /// Domains written by `generate`.
    pub fn generated() -> impl Iterator<Item = &'static Domain> {
        DOMAINS.iter().filter(|domain| domain.output_file.is_some())
    }

    /// The well-known system location of this domain's file.
    pub fn system_config(&self) -> PathBuf {
        PathBuf::from(self.system_path)
    }

    /// The per-user location of this domain's file.
    ///
    /// # Errors
    /// Returns an error if the user config home cannot be determined.
    pub fn user_config(&self) -> io::Result<PathBuf> {
        ConfigPaths::user_file(Path::new(self.user_path))
    }

    /// The file to read: the user copy when `user` is set, the system one otherwise.
    ///
    /// # Errors
    /// Returns an error if `user` is set and the config home cannot be determined.
    pub fn config_path(&self, user: bool) -> io::Result<PathBuf> {
        if user {
            self.user_config()
        } else {
            Ok(self.system_config())
        }
    }
}
