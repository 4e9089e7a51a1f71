//! Render state overrides for a scene subtree
//!
//! A [`RenderStateNode`] keeps two option sets. Options in `enabled` are
//! switched on for its subtree, options in `disabled` are switched off, and
//! everything else is inherited from the nearest ancestor that says
//! otherwise. An option is never in both sets.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Render features a node can switch on or off
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RenderStateOption: u32 {
        /// Texture sampling
        const TEXTURE = 1 << 0;
        /// Shader programs
        const SHADER = 1 << 1;
        /// Back-face culling
        const BACKFACE = 1 << 2;
        /// Lighting
        const LIGHTING = 1 << 3;
        /// Depth testing
        const DEPTH_TEST = 1 << 4;
        /// Wireframe rasterisation
        const WIREFRAME = 1 << 5;
        /// Smooth per-vertex normals
        const SOFT_NORMAL = 1 << 6;
        /// Flat per-face normals
        const HARD_NORMAL = 1 << 7;
        /// Binormal visualisation
        const BINORMAL = 1 << 8;
        /// Tangent visualisation
        const TANGENT = 1 << 9;
    }
}

/// Scene node that overrides render options for its subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStateNode {
    enabled: RenderStateOption,
    disabled: RenderStateOption,
}

impl RenderStateNode {
    /// Node that inherits every option
    pub fn new() -> Self {
        Self::default()
    }

    /// True if every option in `options` is enabled
    pub fn is_enabled(&self, options: RenderStateOption) -> bool {
        self.enabled.contains(options)
    }

    /// True if every option in `options` is disabled
    pub fn is_disabled(&self, options: RenderStateOption) -> bool {
        self.disabled.contains(options)
    }

    /// Options switched on by this node
    pub const fn enabled(&self) -> RenderStateOption {
        self.enabled
    }

    /// Options switched off by this node
    pub const fn disabled(&self) -> RenderStateOption {
        self.disabled
    }

    /// Switch `options` on, removing them from the disabled set
    pub fn enable(&mut self, options: RenderStateOption) {
        self.disabled.remove(options);
        self.enabled.insert(options);
    }

    /// Switch `options` off, removing them from the enabled set
    pub fn disable(&mut self, options: RenderStateOption) {
        self.enabled.remove(options);
        self.disabled.insert(options);
    }

    /// Flip `options` if they are all enabled or all disabled
    ///
    /// Options that are partly set, or inherited, stay as they are.
    pub fn toggle(&mut self, options: RenderStateOption) {
        if self.is_enabled(options) {
            self.disable(options);
        } else if self.is_disabled(options) {
            self.enable(options);
        }
    }

    /// Node that undoes this one: enabled and disabled swapped
    pub const fn inverse(&self) -> Self {
        Self {
            enabled: self.disabled,
            disabled: self.enabled,
        }
    }

    fn write_options(f: &mut fmt::Formatter<'_>, label: &str, options: RenderStateOption) -> fmt::Result {
        let names: Vec<&str> = options.iter_names().map(|(name, _)| name).collect();
        write!(f, "\n{label}: {} ", names.join(", "))
    }
}

impl fmt::Display for RenderStateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderStateNode")?;
        if !self.enabled.is_empty() {
            Self::write_options(f, "Enabled", self.enabled)?;
        }
        if !self.disabled.is_empty() {
            Self::write_options(f, "Disabled", self.disabled)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_disable_are_exclusive() {
        let mut node = RenderStateNode::new();
        node.enable(RenderStateOption::TEXTURE | RenderStateOption::LIGHTING);
        assert!(node.is_enabled(RenderStateOption::TEXTURE));
        assert!(node.is_enabled(RenderStateOption::TEXTURE | RenderStateOption::LIGHTING));

        node.disable(RenderStateOption::LIGHTING);
        assert!(node.is_disabled(RenderStateOption::LIGHTING));
        assert!(!node.is_enabled(RenderStateOption::LIGHTING));
        assert!(node.enabled().intersection(node.disabled()).is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut node = RenderStateNode::new();
        node.toggle(RenderStateOption::WIREFRAME);
        assert!(!node.is_enabled(RenderStateOption::WIREFRAME));
        assert!(!node.is_disabled(RenderStateOption::WIREFRAME));

        node.enable(RenderStateOption::WIREFRAME);
        node.toggle(RenderStateOption::WIREFRAME);
        assert!(node.is_disabled(RenderStateOption::WIREFRAME));
        node.toggle(RenderStateOption::WIREFRAME);
        assert!(node.is_enabled(RenderStateOption::WIREFRAME));
    }

    #[test]
    fn test_inverse_swaps_sets() {
        let mut node = RenderStateNode::new();
        node.enable(RenderStateOption::SHADER);
        node.disable(RenderStateOption::BACKFACE);

        let inverse = node.inverse();
        assert!(inverse.is_disabled(RenderStateOption::SHADER));
        assert!(inverse.is_enabled(RenderStateOption::BACKFACE));
        assert_eq!(inverse.inverse(), node);
    }

    #[test]
    fn test_display() {
        let mut node = RenderStateNode::new();
        assert_eq!(node.to_string(), "RenderStateNode");

        node.enable(RenderStateOption::SHADER | RenderStateOption::TEXTURE);
        node.disable(RenderStateOption::DEPTH_TEST);
        assert_eq!(
            node.to_string(),
            "RenderStateNode\nEnabled: TEXTURE, SHADER \nDisabled: DEPTH_TEST "
        );
    }
}
