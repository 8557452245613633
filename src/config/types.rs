use serde::Deserialize;

/// Main configuration structure for Marquee
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
///
/// The defaults reproduce the fixed target the harvester was written
/// for, so an empty `[site]` table is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Listing URL template; the page index is appended verbatim
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Number of listing pages to fetch, starting at page 1
    #[serde(rename = "total-pages", default = "default_total_pages")]
    pub total_pages: u32,

    /// Browser-identifying User-Agent; the site rejects bare clients
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Crawl pacing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Lower bound of the politeness delay between pages (milliseconds)
    #[serde(rename = "delay-min-ms", default = "default_delay_min_ms")]
    pub delay_min_ms: u64,

    /// Upper bound of the politeness delay between pages (milliseconds)
    #[serde(rename = "delay-max-ms", default = "default_delay_max_ms")]
    pub delay_max_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path the CSV export is written to
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,
}

fn default_base_url() -> String {
    "https://ssr1.scrape.center/page/".to_string()
}

fn default_total_pages() -> u32 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

fn default_delay_min_ms() -> u64 {
    500
}

fn default_delay_max_ms() -> u64 {
    1000
}

fn default_csv_path() -> String {
    "./movies.csv".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: default_base_url(),
            total_pages: default_total_pages(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            delay_min_ms: default_delay_min_ms(),
            delay_max_ms: default_delay_max_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            csv_path: default_csv_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: SiteConfig::default(),
            crawl: CrawlConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
