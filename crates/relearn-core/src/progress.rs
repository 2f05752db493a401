use serde::{Deserialize, Serialize};

/// 進捗イベント。
///
/// 一括生成や一括テストなど、演習単位で進む操作の状況を CLI に通知する。
/// コアは出力を行わず、描画はすべて CLI 側のコールバックで行う。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum ProgressEvent {
    /// 対象の処理開始
    Started {
        step: usize,
        total: usize,
        target: String,
    },
    /// 対象の処理成功
    Succeeded {
        step: usize,
        total: usize,
        target: String,
    },
    /// 対象の処理失敗（detail はコマンド出力やエラー内容）
    Failed {
        step: usize,
        total: usize,
        target: String,
        detail: String,
    },
    /// 対象のスキップ
    Skipped { target: String, reason: String },
    /// ログメッセージ
    Log { message: String },
    /// 警告
    Warning { message: String },
    /// 全体完了
    Finished { success: bool, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_event_tagged_json_format() {
        let event = ProgressEvent::Failed {
            step: 2,
            total: 5,
            target: "02-hooks/01-usestate-basics".to_string(),
            detail: "FAIL src/App.test.tsx".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["kind"], "Failed");
        assert_eq!(value["step"], 2);
        assert_eq!(value["target"], "02-hooks/01-usestate-basics");
    }
}
