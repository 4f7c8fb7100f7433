use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn dataset_path(&self) -> &str;
    fn output_format(&self) -> &str;
    fn default_key(&self) -> Option<&str>;
    fn validate_dataset(&self) -> bool;
}
