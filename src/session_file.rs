//! セッションファイル
//!
//! ブラウザのCookieの代わりに、サインインで得たトークンを
//! `~/.config/catalog-admin/session.json` に保存する。

use catalog_admin_common::{Error, SessionStore, SessionToken};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 設定ディレクトリ内のセッションファイル
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&mut self, token: &SessionToken) -> catalog_admin_common::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Storage(e.to_string()))?;
        }
        let file = File::create(&self.path).map_err(|e| Error::Storage(e.to_string()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), token)?;
        Ok(())
    }

    fn load(&self) -> Option<SessionToken> {
        let file = File::open(&self.path).ok()?;
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!("セッションファイルを読み込めません: {}", e);
                None
            }
        }
    }

    fn clear(&mut self) -> catalog_admin_common::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(e.to_string())),
        }
    }
}
