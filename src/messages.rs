//! User-facing Text

pub const LOADING: &str = "読み込み中...";
pub const GENERIC_ERROR: &str = "エラーが発生しました";
pub const NOT_FOUND: &str = "ページが見つかりません";

pub const LOGIN_FAILED: &str = "ログインに失敗しました";
pub const REGISTER_FAILED: &str = "登録に失敗しました";
pub const PASSWORD_MISMATCH: &str = "パスワードが一致しません";
pub const LOGOUT_FAILED: &str = "ログアウトに失敗しました";

pub const DUE_DATE_IN_PAST: &str = "期限は現在より未来の日時を指定してください。";
pub const DUE_DATE_INVALID: &str = "期限の日時が正しくありません。";
pub const TASK_LOAD_FAILED: &str = "タスクの取得に失敗しました";
pub const TASK_UPDATE_FAILED: &str = "タスクの更新に失敗しました";
pub const TASK_DELETE_FAILED: &str = "タスクの削除に失敗しました";
