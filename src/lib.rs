//! Prospectus: a property brochure template engine and generator.

pub(crate) mod brand;
pub(crate) mod brochure;
pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod property;
pub(crate) mod remote;
pub(crate) mod render;
pub(crate) mod template;
pub(crate) mod theme;

pub use crate::{
    brand::{BrandKit, BrandKitError, BrandKitStore, BrandPreset, CustomColor, Logo, PRESETS},
    brochure::{Brochure, BrochureBuilder, BrochurePage, BuildBrochureError},
    config::{BrandConfig, Config, ConfigLoadError, DefaultsConfig, RemoteConfig},
    layout::{Element, ElementKind, Layout, LayoutRegistry, LoadLayoutError, PageKind, SpecItem},
    property::{FieldValue, PropertyData},
    remote::{CustomTemplateClient, CustomTemplate, PhotoSource, RemoteError, StockPhoto, TemplateData},
    render::{escape, HtmlDocument, Node, RenderError, RenderMode, Renderer},
    template::{
        generate_all, generate_with_user_colors, thumbnail, FilteredTemplates, Template, TemplateFilter,
        TemplateStore, PREVIEW_LIMIT, USER_SCHEME_ID,
    },
    theme::{Color, ColorScheme, FontPairing, LoadSchemeError, ParseColorError, SchemeRegistry},
};
