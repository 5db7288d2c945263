use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "catalog-admin")]
#[command(about = "商品カタログ管理コンソール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// APIパス
    #[arg(long, global = true)]
    pub api_path: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 管理者としてログイン
    Login {
        /// メールアドレス（省略時は入力を求める）
        #[arg(short, long)]
        username: Option<String>,
    },

    /// ログアウト
    Logout,

    /// 商品一覧を表示
    List,

    /// 商品の詳細を表示
    Show {
        /// 商品ID
        id: String,

        /// 表示する画像の番号（0: メイン画像）
        #[arg(short, long)]
        image: Option<usize>,
    },

    /// 商品を追加
    Add,

    /// 商品を編集
    Edit {
        /// 商品ID
        id: String,
    },

    /// 商品を削除
    Delete {
        /// 商品ID
        id: String,

        /// 確認なしで削除
        #[arg(short, long)]
        yes: bool,
    },

    /// 対話式の管理画面
    Console,

    /// 設定を変更
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// APIパスを設定
        #[arg(long)]
        set_api_path: Option<String>,

        /// リクエストのタイムアウト（秒）を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
