//! Named icon resources.
//!
//! Widgets refer to icons by name and resolve them through a process-wide
//! registry. The registry is seeded with the built-in icons this crate
//! embeds; applications can register their own under new names or shadow a
//! built-in by re-registering its name.
//!
//! Resolution is non-failing by design: an unknown name or undecodable
//! entry logs a warning and yields `None`, and callers degrade to "no icon".
//!
//! # Example
//!
//! ```
//! use clearedit::icons;
//!
//! let icon = icons::resolve(icons::EDIT_CLEAR).expect("built-in icon");
//! assert_eq!(icon.display_size().width, 24.0);
//!
//! assert!(icons::resolve("no-such-icon").is_none());
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use clearedit_render::{EmbeddedIconData, Icon, ImageFormat};

/// Name of the built-in clear ("x") icon.
pub const EDIT_CLEAR: &str = "edit-clear";

/// The built-in 24x24 clear icon.
const EDIT_CLEAR_DATA: EmbeddedIconData = EmbeddedIconData::new(
    include_bytes!("../assets/icons/edit-clear.png"),
    ImageFormat::Png,
    EDIT_CLEAR,
);

fn registry() -> &'static RwLock<HashMap<&'static str, EmbeddedIconData>> {
    static REGISTRY: OnceLock<RwLock<HashMap<&'static str, EmbeddedIconData>>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut icons = HashMap::new();
        icons.insert(EDIT_CLEAR, EDIT_CLEAR_DATA);
        RwLock::new(icons)
    })
}

/// Register an icon under a name, replacing any previous registration.
pub fn register(icon: EmbeddedIconData) {
    registry().write().insert(icon.name(), icon);
}

/// Check whether a name is registered.
pub fn contains(name: &str) -> bool {
    registry().read().contains_key(name)
}

/// Resolve a name to a decoded [`Icon`].
///
/// Returns `None` for unknown names and for entries that fail to decode;
/// both cases log a warning and are otherwise silent.
pub fn resolve(name: &str) -> Option<Icon> {
    let data = {
        let icons = registry().read();
        icons.get(name).copied()
    };

    let Some(data) = data else {
        tracing::warn!(target: "clearedit::icons", name, "icon not registered");
        return None;
    };

    match data.decode() {
        Ok(image) => Some(Icon::from_image(image)),
        Err(err) => {
            tracing::warn!(target: "clearedit::icons", name, error = %err, "failed to decode icon");
            None
        }
    }
}
