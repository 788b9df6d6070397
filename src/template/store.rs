use super::{generate_all, generate_with_user_colors, Template};
use crate::{
    layout::LayoutRegistry,
    theme::{ColorScheme, SchemeRegistry},
};

/// The most preview thumbnails a single filter pass will return.
///
/// Every preview renders a full SVG swatch, so an unbounded result set makes
/// the picker crawl; the true total is reported separately.
pub const PREVIEW_LIMIT: usize = 50;

/// The filters the picker applies, all conjunctive.
#[derive(Clone, Debug, Default)]
pub struct TemplateFilter {
    /// Exact category match (`cover`, `details`, `gallery`, `contact`).
    pub category: Option<String>,

    /// Case-insensitive substring match against name, category and id.
    pub query: Option<String>,

    /// Exact scheme id match. Only meaningful in preset mode.
    pub scheme: Option<String>,

    /// Exact format match.
    pub format: Option<String>,
}

impl TemplateFilter {
    fn matches(&self, template: &Template) -> bool {
        if let Some(category) = &self.category {
            if &template.category != category {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let hit = template.name.to_lowercase().contains(&query)
                || template.category.to_lowercase().contains(&query)
                || template.id.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        if let Some(scheme) = &self.scheme {
            if &template.scheme_id != scheme {
                return false;
            }
        }
        if let Some(format) = &self.format {
            if &template.format != format {
                return false;
            }
        }
        true
    }
}

/// One page of filtered results plus the uncapped total.
pub struct FilteredTemplates<'a> {
    pub templates: Vec<&'a Template>,
    pub total: usize,
}

/// The generated template catalog.
///
/// This is an explicit value the caller owns and threads through the picker
/// and renderer; there is no ambient global catalog. Regeneration replaces
/// the whole list in one assignment, so a reader never observes a partial
/// catalog.
#[derive(Default)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Regenerate the full preset catalog, replacing whatever was there.
    pub fn regenerate(&mut self, layouts: &LayoutRegistry, schemes: &SchemeRegistry) {
        self.templates = generate_all(layouts, schemes);
    }

    /// Switch to user-colors mode, replacing the whole catalog.
    pub fn set_user_colors(&mut self, layouts: &LayoutRegistry, colors: &ColorScheme) {
        self.templates = generate_with_user_colors(layouts, colors);
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Apply the filter and cap the result page at [PREVIEW_LIMIT].
    pub fn filter(&self, filter: &TemplateFilter) -> FilteredTemplates<'_> {
        let matching: Vec<_> = self.templates.iter().filter(|template| filter.matches(template)).collect();
        let total = matching.len();
        let templates = matching.into_iter().take(PREVIEW_LIMIT).collect();
        FilteredTemplates { templates, total }
    }
}
