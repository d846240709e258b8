//! nbstore publish コマンド
//!
//! 公開申請の入力を検証し、GitHub issue 作成 URL を表示する。

use crate::config::StoreConfig;
use crate::i18n::{tr, MessageId};
use crate::output;
use crate::store::{split_tags, PublishRequest};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Display name of the plugin
    #[arg(long)]
    pub name: String,

    /// PyPI project name
    #[arg(long)]
    pub pypi: String,

    /// Import module name
    #[arg(long)]
    pub module: String,

    /// Tag label (repeatable, at most 3; commas also separate)
    #[arg(long)]
    pub tag: Vec<String>,
}

impl Args {
    fn tags(&self) -> Vec<String> {
        self.tag
            .iter()
            .flat_map(|raw| split_tags(raw))
            .collect()
    }
}

pub async fn run(args: Args, config: &StoreConfig) -> Result<(), String> {
    let url = issue_url(&args).map_err(|e| e.to_string())?;

    println!("{}", output::success(&tr(config.locale, MessageId::FormSubmitted)));
    println!("{url}");
    Ok(())
}

fn issue_url(args: &Args) -> crate::error::Result<String> {
    PublishRequest::new(&args.name, &args.pypi, &args.module, &args.tags())?.issue_url()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tags: &[&str]) -> Args {
        Args {
            name: "Weather".to_string(),
            pypi: "nonebot-plugin-weather".to_string(),
            module: "nonebot_plugin_weather".to_string(),
            tag: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_tags_split_commas_across_flags() {
        assert_eq!(
            args(&["api, fun", "tool"]).tags(),
            vec!["api".to_string(), "fun".to_string(), "tool".to_string()]
        );
    }

    #[test]
    fn test_issue_url_for_valid_args() {
        let url = issue_url(&args(&["api"])).unwrap();
        assert!(url.starts_with("https://github.com/nonebot/nonebot2/issues/new?"));
        assert!(url.contains("module=nonebot_plugin_weather"));
    }

    #[test]
    fn test_issue_url_rejects_too_many_tags() {
        let err = issue_url(&args(&["a,b,c,d"])).unwrap_err();
        assert!(err.to_string().contains("at most 3 tags"));
    }

    #[test]
    fn test_issue_url_rejects_bad_module() {
        let mut args = args(&[]);
        args.module = "1bad".to_string();
        assert!(issue_url(&args).is_err());
    }
}
