//! Design-system component library.
//!
//! The crate owns the Leptos primitives mirrored from the design tool's
//! component sets (button, card, list card, accordion, chips), a centralized
//! icon API, and the [`ToggleSet`] bookkeeping behind accordion and chip
//! selection. Styling keys off the stable `data-ui-*` DOM contract rather than
//! inline styles.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
pub mod selection;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Accordion, AccordionItem, Button, ButtonVariant, Card, CardAssetType, CardDirection,
    CardVariant, ChipItem, ChipVariant, Chips, Cluster, ContentCard, ContentCardVariant, LayoutGap,
    ListCard, Stack,
};
pub use selection::{SelectionMode, ToggleSet};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionItem, Button, ButtonVariant, Card, CardAssetType, CardDirection,
        CardVariant, ChipItem, ChipVariant, Chips, Cluster, ContentCard, ContentCardVariant, Icon,
        IconName, IconSize, LayoutGap, ListCard, SelectionMode, Stack, ToggleSet,
    };
}
