//! 选项文档服务
//!
//! 输入路径的解析顺序：命令行参数 → 用户配置目录 → 内置示例。
//! 文档解析失败不终止程序：退回内置示例，并把错误交给弹窗显示。

use std::path::PathBuf;

use anyhow::{Context, Result};

use picklist_core::{OptionGroup, OptionItem, OptionSource, OptionsDocument, SelectionExport};

/// 选项文档的来源与选择结果的输出位置
#[derive(Debug, Clone)]
pub struct OptionsStore {
    /// 输入文档路径
    input: Option<PathBuf>,
    /// 选择结果输出路径
    output: PathBuf,
}

impl OptionsStore {
    const DEFAULT_OUTPUT: &'static str = "picklist-selection.json";

    /// 从命令行参数构建：`picklist-tui [选项文档] [输出文件]`
    pub fn from_args(args: &[String]) -> Self {
        let input = args
            .first()
            .map(PathBuf::from)
            .or_else(default_options_path);
        let output = args
            .get(1)
            .map_or_else(|| PathBuf::from(Self::DEFAULT_OUTPUT), PathBuf::from);

        Self { input, output }
    }

    /// 加载选项文档
    ///
    /// 失败时退回内置示例，并返回一条待显示的错误消息。
    pub fn load_or_sample(&self) -> (OptionsDocument, Option<String>) {
        match &self.input {
            Some(path) => match OptionsDocument::load(path) {
                Ok(document) => (document, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    (
                        sample_document(),
                        Some(format!("{}: {err}", path.display())),
                    )
                }
            },
            None => (sample_document(), None),
        }
    }

    /// 写出选择结果，返回写入路径
    pub fn save_selection(&self, export: &SelectionExport) -> Result<PathBuf> {
        export
            .save(&self.output)
            .with_context(|| format!("write {}", self.output.display()))?;
        Ok(self.output.clone())
    }
}

/// 用户配置目录里的默认文档位置（仅当文件存在时使用）
fn default_options_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("picklist").join("options.json");
    path.exists().then_some(path)
}

/// 内置示例数据（开发与演示用）
pub fn sample_document() -> OptionsDocument {
    OptionsDocument {
        options: OptionSource::Grouped(vec![
            OptionGroup::new(
                "Equipo Norte",
                vec![
                    OptionItem::new(1, "José"),
                    OptionItem::new(2, "Ángela"),
                    OptionItem::new(3, "Iván"),
                    OptionItem::new(4, "Andrés"),
                ],
            ),
            OptionGroup::new(
                "Equipo Sur",
                vec![
                    OptionItem::new(5, "María"),
                    OptionItem::new(6, "Raúl"),
                    OptionItem::new(7, "Sofía"),
                    OptionItem::new(8, "Martín"),
                    OptionItem::new(9, "Zoë"),
                ],
            ),
        ]),
        selected: vec![5],
        show_count: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_override_both_paths() {
        let args = vec!["opts.json".to_string(), "out.json".to_string()];
        let store = OptionsStore::from_args(&args);

        assert_eq!(store.input, Some(PathBuf::from("opts.json")));
        assert_eq!(store.output, PathBuf::from("out.json"));
    }

    #[test]
    fn missing_input_falls_back_to_the_sample() {
        let store = OptionsStore {
            input: None,
            output: PathBuf::from(OptionsStore::DEFAULT_OUTPUT),
        };
        let (document, error) = store.load_or_sample();

        assert!(error.is_none());
        assert!(document.options.is_grouped());
        assert!(document.validate().is_ok());
    }

    #[test]
    fn unreadable_input_surfaces_the_error_and_still_runs() {
        let store = OptionsStore {
            input: Some(PathBuf::from("/nonexistent/options.json")),
            output: PathBuf::from(OptionsStore::DEFAULT_OUTPUT),
        };
        let (document, error) = store.load_or_sample();

        assert!(error.is_some());
        assert!(document.options.option_count() > 0);
    }
}
