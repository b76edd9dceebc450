use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{
    ChmodFilesParams, CompressFilesParams, CopyFileParams, CreateFolderParams, DecompressFileParams, DeleteFilesParams,
    FileObject, PullFileParams, RenameFilesParams, SignedUrl,
};

/// The server's file manager.
#[derive(Debug, Clone)]
pub struct Files {
    gateway: Gateway,
    path: String,
}

impl Files {
    pub(crate) fn new(gateway: Gateway, server_path: &str) -> Self {
        Self {
            gateway,
            path: format!("{server_path}/files"),
        }
    }

    /// Entries of `directory`, or of the server root when `None`.
    pub fn list(&self, directory: Option<&str>) -> Result<Vec<FileObject>, Error> {
        let mut config = RequestConfig::get(format!("{}/list", self.path));
        if let Some(directory) = directory {
            config = config.query_pair("directory", directory);
        }
        self.gateway.list(config)
    }

    /// Raw file contents.
    pub fn contents(&self, file: &str) -> Result<String, Error> {
        let config = RequestConfig::get(format!("{}/contents", self.path))
            .query_pair("file", file)
            .header("Accept", "text/plain");
        self.gateway.text(config)
    }

    /// A one-time signed link to download `file`.
    pub fn download_url(&self, file: &str) -> Result<String, Error> {
        let config = RequestConfig::get(format!("{}/download", self.path)).query_pair("file", file);
        self.gateway.single::<SignedUrl>(config).map(|signed| signed.url)
    }

    pub fn upload_url(&self) -> Result<String, Error> {
        self.gateway
            .single::<SignedUrl>(RequestConfig::get(format!("{}/upload", self.path)))
            .map(|signed| signed.url)
    }

    /// Create or overwrite `file` with `content`.
    pub fn write(&self, file: &str, content: &str) -> Result<(), Error> {
        let config = RequestConfig::post(format!("{}/write", self.path))
            .query_pair("file", file)
            .text(content);
        self.gateway.empty(config)
    }

    pub fn create_folder(&self, params: &CreateFolderParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{}/create-folder", self.path)).json(params)?)
    }

    pub fn rename(&self, params: &RenameFilesParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::put(format!("{}/rename", self.path)).json(params)?)
    }

    pub fn copy(&self, params: &CopyFileParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{}/copy", self.path)).json(params)?)
    }

    pub fn delete(&self, params: &DeleteFilesParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{}/delete", self.path)).json(params)?)
    }

    /// Returns the archive that was created.
    pub fn compress(&self, params: &CompressFilesParams) -> Result<FileObject, Error> {
        self.gateway
            .single(RequestConfig::post(format!("{}/compress", self.path)).json(params)?)
    }

    pub fn decompress(&self, params: &DecompressFileParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{}/decompress", self.path)).json(params)?)
    }

    pub fn chmod(&self, params: &ChmodFilesParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{}/chmod", self.path)).json(params)?)
    }

    /// Have the daemon download a remote file into the server.
    pub fn pull(&self, params: &PullFileParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{}/pull", self.path)).json(params)?)
    }
}
