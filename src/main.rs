use clap::{error::ErrorKind, CommandFactory, Parser};
use prospectus::{
    BrandKitStore, BrochureBuilder, ColorScheme, Config, CustomTemplateClient, FontPairing, HtmlDocument,
    LayoutRegistry, PropertyData, RenderMode, Renderer, SchemeRegistry, TemplateData, TemplateFilter,
    TemplateStore,
};
use std::{fs, path::PathBuf};

const DEFAULT_SCHEME: &str = "midnight_gold";

/// Generate property brochures from your terminal.
#[derive(Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct Cli {
    /// The path to the JSON file that contains the property data.
    #[clap(group = "target")]
    path: Option<PathBuf>,

    /// Write the generated document here rather than to stdout.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Render a single catalog template rather than the full brochure.
    #[clap(short, long)]
    template: Option<String>,

    /// The color scheme to use.
    #[clap(short, long)]
    scheme: Option<String>,

    /// Use the saved brand kit's colors and fonts.
    #[clap(long)]
    brand_kit: bool,

    /// Fail on missing imagery rather than rendering drop zones.
    #[clap(short, long)]
    export: bool,

    /// List the generated template catalog.
    #[clap(long, group = "target")]
    list_templates: bool,

    /// List all color schemes.
    #[clap(long, group = "target")]
    list_schemes: bool,

    /// List the templates saved to the custom template server.
    #[clap(long, group = "target")]
    list_custom_templates: bool,

    /// Save the active colors and fonts to the custom template server under this name.
    #[clap(long, value_name = "NAME", group = "target")]
    save_template: Option<String>,

    /// Delete a saved template from the custom template server.
    #[clap(long, value_name = "ID", group = "target")]
    delete_template: Option<String>,

    /// Restrict template listing to a category.
    #[clap(long)]
    category: Option<String>,

    /// Restrict template listing to a search term.
    #[clap(long)]
    search: Option<String>,

    /// The path to the config file.
    #[clap(long)]
    config_file: Option<PathBuf>,

    /// Generate a JSON schema for the configuration file.
    #[cfg(feature = "json-schema")]
    #[clap(long)]
    generate_config_file_schema: bool,
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let path = match &cli.config_file {
        Some(path) => path.clone(),
        None => match directories::ProjectDirs::from("", "", "prospectus") {
            Some(dirs) => dirs.config_dir().join("config.yaml"),
            None => return Ok(Config::default()),
        },
    };
    Ok(Config::load(&path)?)
}

fn list_schemes() {
    let registry = SchemeRegistry::default();
    for (id, scheme) in registry.iter() {
        println!("{id}: {} ({} / {} / {})", scheme.name, scheme.primary, scheme.secondary, scheme.accent);
    }
}

fn list_templates(cli: &Cli, config: &Config) {
    let layouts = LayoutRegistry::built_in();
    let schemes = SchemeRegistry::default();
    let mut store = TemplateStore::default();
    store.regenerate(&layouts, &schemes);

    let filter = TemplateFilter {
        category: cli.category.clone().or_else(|| config.defaults.category.clone()),
        query: cli.search.clone(),
        ..Default::default()
    };
    let result = store.filter(&filter);
    for template in &result.templates {
        println!("{}: {} [{}]", template.id, template.name, template.category);
    }
    println!("showing {} of {} templates", result.templates.len(), result.total);
}

fn active_scheme_id(cli: &Cli, config: &Config) -> String {
    cli.scheme.clone().or_else(|| config.defaults.scheme.clone()).unwrap_or_else(|| DEFAULT_SCHEME.into())
}

/// The style summary a saved custom template carries: the active palette and
/// font trio, keyed the same way layout style tokens are.
fn style_summary(colors: &ColorScheme, fonts: &FontPairing) -> TemplateData {
    let mut data = TemplateData::default();
    for (key, value) in [
        ("primary", colors.primary.to_string()),
        ("secondary", colors.secondary.to_string()),
        ("accent", colors.accent.to_string()),
        ("background", colors.background.to_string()),
        ("text", colors.text.to_string()),
        ("heading-font", fonts.heading.clone()),
        ("subheading-font", fonts.subheading.clone()),
        ("body-font", fonts.body.clone()),
    ] {
        data.styles.insert(key.into(), value);
    }
    data
}

fn run(mut cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "json-schema")]
    if cli.generate_config_file_schema {
        let schema = schemars::schema_for!(Config);
        serde_json::to_writer_pretty(std::io::stdout(), &schema)
            .map_err(|e| format!("failed to write schema: {e}"))?;
        return Ok(());
    }

    let config = load_config(&cli)?;
    if cli.list_schemes {
        list_schemes();
        return Ok(());
    } else if cli.list_templates {
        list_templates(&cli, &config);
        return Ok(());
    } else if cli.list_custom_templates {
        let client = CustomTemplateClient::from_config(&config.remote)?;
        for template in client.list()? {
            println!("{}: {}", template.id, template.name);
        }
        return Ok(());
    } else if let Some(name) = &cli.save_template {
        let client = CustomTemplateClient::from_config(&config.remote)?;
        let schemes = SchemeRegistry::default();
        let scheme_id = active_scheme_id(&cli, &config);
        let colors =
            schemes.load_by_id(&scheme_id).ok_or_else(|| format!("unknown scheme '{scheme_id}'"))?;
        let summary = style_summary(&colors, &FontPairing::for_scheme(&scheme_id));
        let template = client.create(name, "", &summary)?;
        println!("saved custom template {}", template.id);
        return Ok(());
    } else if let Some(template_id) = &cli.delete_template {
        let client = CustomTemplateClient::from_config(&config.remote)?;
        client.delete(template_id)?;
        println!("deleted custom template {template_id}");
        return Ok(());
    }

    let path = cli.path.take().unwrap_or_else(|| {
        Cli::command().error(ErrorKind::MissingRequiredArgument, "no property data specified").exit();
    });
    let contents = fs::read_to_string(&path)?;
    let data: PropertyData = serde_json::from_str(&contents)?;

    let mode = if cli.export { RenderMode::Export } else { RenderMode::Editor };
    let schemes = SchemeRegistry::default();
    // The brand kit overrides whatever the template or scheme would pick.
    let brand_override = if cli.brand_kit {
        let store = match &config.brand.store_path {
            Some(path) => BrandKitStore::new(path.clone()),
            None => BrandKitStore::default_location().ok_or("no config directory for the brand kit")?,
        };
        let kit = store.load();
        Some((kit.colors.to_scheme(&kit.name), kit.fonts))
    } else {
        None
    };

    let html = match &cli.template {
        Some(template_id) => {
            let layouts = LayoutRegistry::built_in();
            let mut store = TemplateStore::default();
            store.regenerate(&layouts, &schemes);
            let template =
                store.get(template_id).ok_or_else(|| format!("unknown template '{template_id}'"))?;
            let (colors, fonts) =
                brand_override.unwrap_or_else(|| (template.colors.clone(), template.fonts.clone()));
            let renderer = Renderer::new(&colors, &fonts, mode);
            let page = renderer.render_layout(&template.layout, &data)?;
            let mut document = HtmlDocument::new(&template.name);
            document.push(page);
            document.render()
        }
        None => {
            let (colors, fonts) = match brand_override {
                Some(override_pair) => override_pair,
                None => {
                    let scheme_id = active_scheme_id(&cli, &config);
                    let colors = schemes
                        .load_by_id(&scheme_id)
                        .ok_or_else(|| format!("unknown scheme '{scheme_id}'"))?;
                    (colors, FontPairing::for_scheme(&scheme_id))
                }
            };
            BrochureBuilder::new(&colors, &fonts, mode).build(&data)?.to_html()
        }
    };

    match &cli.output {
        Some(output) => fs::write(output, html)?,
        None => println!("{html}"),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectus::Color;

    #[test]
    fn style_summary_covers_palette_and_fonts() {
        let colors = ColorScheme {
            name: "Test".into(),
            primary: Color::new(0x11, 0x11, 0x11),
            secondary: Color::new(0x22, 0x22, 0x22),
            accent: Color::new(0x33, 0x33, 0x33),
            background: Color::new(0xff, 0xff, 0xff),
            text: Color::new(0x00, 0x00, 0x00),
        };
        let summary = style_summary(&colors, &FontPairing::default());
        assert_eq!(summary.styles.get("accent").map(String::as_str), Some("#333333"));
        assert_eq!(summary.styles.get("heading-font").map(String::as_str), Some("DM Serif Display"));
        assert_eq!(summary.styles.len(), 8);
    }
}
