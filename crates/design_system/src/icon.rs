//! Centralized icon API for the component library.
//!
//! Glyphs are the design tool's exported vectors and paint with `currentColor`,
//! so the owning primitive's color token decides their color.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named glyphs available to primitives and applications.
pub enum IconName {
    /// Folded map.
    Map,
    /// Check mark.
    Check,
    /// Family group, the list card default.
    Family,
    /// Info circle, the card default.
    InfoCircle,
    /// Mountains and sun, shown when an image slot has no source.
    ImagePlaceholder,
    /// Downward chevron used by disclosure headers.
    ChevronDown,
}

impl IconName {
    /// Stable token emitted as `data-ui-icon`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Check => "check",
            Self::Family => "family",
            Self::InfoCircle => "info-circle",
            Self::ImagePlaceholder => "image-placeholder",
            Self::ChevronDown => "chevron-down",
        }
    }

    fn view_box(self) -> &'static str {
        match self {
            Self::Map => "0 0 23 18",
            Self::Check => "0 0 18 13",
            Self::Family => "0 0 20 21",
            Self::InfoCircle => "0 0 30 30",
            Self::ImagePlaceholder => "0 0 64 64",
            Self::ChevronDown => "0 0 16 16",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 16px glyph.
    Sm,
    /// 20px glyph.
    Md,
    /// 32px glyph.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn pixels(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }
}

const MAP_PATH: &str = "M22.5499 0.239468C22.8293 0.399113 22.9889 0.718404 22.9889 0.997783V14.408C22.9889 14.8071 22.7095 15.1663 22.3503 15.3259L15.6452 17.8803C15.4457 17.9601 15.2062 17.9601 15.0067 17.8803L7.66297 15.4457L1.27716 17.8803C0.997783 18 0.638581 17.9601 0.399113 17.7605C0.119734 17.6009 0 17.2816 0 16.9623V3.55211C0 3.15299 0.239468 2.8337 0.59867 2.67406L7.30377 0.119734C7.50333 0.0399113 7.74279 0.0399113 7.94235 0.119734L15.286 2.55432L21.6718 0.119734C21.9512 0 22.3104 0.0399113 22.5499 0.239468ZM1.91574 4.2306V15.6053L6.7051 13.7694V2.39468L1.91574 4.2306ZM14.3681 15.6452V4.27051L8.62084 2.35477V13.7295L14.3681 15.6452ZM16.2838 15.6053L21.0732 13.7694V2.39468L16.2838 4.2306V15.6053Z";

const CHECK_PATH: &str = "M17.6424 0.357616C18 0.754967 18 1.35099 17.6424 1.70861L7.15232 12.1987C6.75497 12.596 6.15894 12.596 5.80132 12.1987L0.397351 6.7947C0 6.43709 0 5.84106 0.397351 5.48344C0.754967 5.08609 1.35099 5.08609 1.70861 5.48344L6.43709 10.2119L16.2914 0.357616C16.649 0 17.245 0 17.6026 0.357616H17.6424Z";

const FAMILY_PATH: &str = "M7.06809 2.6965C7.06809 3.63619 6.53696 4.49416 5.7607 4.98444C4.94358 5.43385 3.92218 5.43385 3.14591 4.98444C2.32879 4.49416 1.83852 3.63619 1.83852 2.6965C1.83852 1.79767 2.32879 0.939689 3.14591 0.449416C3.92218 0 4.94358 0 5.7607 0.449416C6.53696 0.939689 7.06809 1.79767 7.06809 2.6965ZM3.51362 8.57977C2.85992 8.57977 2.28794 9.11089 2.20623 9.80545L2.0428 11.8074C2.00195 12.1751 2.32879 12.5019 2.6965 12.5019H2.81907H5.27043C5.14786 12.9514 5.107 13.3599 5.107 13.8093V14.463H3.79961V20.0195C3.79961 20.5914 3.35019 21 2.81907 21C2.24708 21 1.83852 20.5914 1.83852 20.0195V14.3405C0.735409 13.9319 0 12.8696 0.0817121 11.644L0.245136 9.64202C0.40856 7.92607 1.83852 6.61868 3.51362 6.61868H5.35214C5.71984 6.61868 6.08755 6.70039 6.4144 6.82296C6.4144 6.98638 6.4144 7.14981 6.4144 7.27237C6.4144 7.76265 6.49611 8.21206 6.65953 8.57977H5.35214H4.45331H3.51362ZM12.9514 7.27237C12.9514 7.19066 12.9105 7.10895 12.9105 6.98638C13.3191 6.7821 13.7685 6.61868 14.2588 6.61868H15.5253C16.7101 6.61868 17.7315 7.39494 18.0584 8.53891L19.6518 14.1362C19.8969 14.9533 19.2432 15.7704 18.3852 15.7704H17.5272V20.0195C17.5272 20.5914 17.0778 21 16.5467 21C15.9747 21 15.5661 20.5914 15.5661 20.0195V15.7704H14.0136C14.177 15.3619 14.2588 14.9533 14.2588 14.463V13.8093H17.5272L16.179 9.07004C16.0973 8.78405 15.8113 8.57977 15.5253 8.57977H14.9125H14.2588H12.6654C12.8288 8.21206 12.9514 7.76265 12.9514 7.27237ZM17.5272 2.6965C17.5272 3.63619 16.9961 4.49416 16.2198 4.98444C15.4027 5.43385 14.3813 5.43385 13.6051 4.98444C12.7879 4.49416 12.2977 3.63619 12.2977 2.6965C12.2977 1.79767 12.7879 0.939689 13.6051 0.449416C14.3813 0 15.4027 0 16.2198 0.449416C16.9961 0.939689 17.5272 1.79767 17.5272 2.6965ZM9.68288 9.23346C8.94747 9.23346 8.33463 8.86576 7.96693 8.25292C7.59922 7.68093 7.59922 6.90467 7.96693 6.29183C8.33463 5.71984 8.94747 5.31128 9.68288 5.31128C10.3774 5.31128 10.9903 5.71984 11.358 6.29183C11.7257 6.90467 11.7257 7.68093 11.358 8.25292C10.9903 8.86576 10.3774 9.23346 9.68288 9.23346ZM10.9903 13.8093C10.9903 13.1148 10.3774 12.5019 9.68288 12.5019C8.94747 12.5019 8.37549 13.1148 8.37549 13.8093V14.463C8.37549 14.8307 8.66148 15.1167 9.02918 15.1167H9.68288H10.3366C10.6634 15.1167 10.9903 14.8307 10.9903 14.463V13.8093ZM12.9514 14.463C12.9514 15.4436 12.3794 16.3016 11.6031 16.751C11.6031 16.8735 11.644 16.9961 11.644 17.0778V19.6926C11.644 20.428 11.0311 21 10.3366 21H9.02918C8.29377 21 7.72179 20.428 7.72179 19.6926V17.0778C7.72179 16.9961 7.72179 16.8735 7.72179 16.751C6.94553 16.3016 6.4144 15.4436 6.4144 14.463V13.8093C6.4144 12.0117 7.84436 10.5409 9.68288 10.5409C11.4805 10.5409 12.9514 12.0117 12.9514 13.8093V14.463Z";

const INFO_CIRCLE_PATH: &str = "M15 20.3932V15M15 9.60673H15.0135M28.4831 15C28.4831 22.4465 22.4465 28.4831 15 28.4831C7.55346 28.4831 1.51685 22.4465 1.51685 15C1.51685 7.55346 7.55346 1.51685 15 1.51685C22.4465 1.51685 28.4831 7.55346 28.4831 15Z";

const CHEVRON_DOWN_PATH: &str = "M3 6l5 5 5-5";

#[component]
/// Decorative icon glyph. Icons are `aria-hidden`; label the owning control instead.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let glyph = match icon {
        IconName::Map => view! { <path d=MAP_PATH></path> }.into_view(),
        IconName::Check => view! { <path d=CHECK_PATH></path> }.into_view(),
        IconName::Family => view! { <path d=FAMILY_PATH></path> }.into_view(),
        IconName::InfoCircle => view! {
            <path
                d=INFO_CIRCLE_PATH
                fill="none"
                stroke="currentColor"
                stroke-width="3"
                stroke-linecap="round"
                stroke-linejoin="round"
            ></path>
        }
        .into_view(),
        IconName::ImagePlaceholder => view! {
            <circle cx="44" cy="18" r="7"></circle>
            <path d="M0 48 L20 20 L36 40 L44 30 L64 48Z"></path>
        }
        .into_view(),
        IconName::ChevronDown => view! {
            <path
                d=CHEVRON_DOWN_PATH
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            ></path>
        }
        .into_view(),
    };

    view! {
        <svg
            class=layout_class.map_or_else(|| "ui-icon".to_string(), |extra| format!("ui-icon {extra}"))
            width=size.pixels()
            height=size.pixels()
            viewBox=icon.view_box()
            fill="currentColor"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {glyph}
        </svg>
    }
}
