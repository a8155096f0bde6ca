mod fake_secrets_uploader;
mod fixtures;
mod memory_filesystem;
mod recording_reporter;
mod scripted_prompt;

#[allow(unused_imports)]
pub use fake_secrets_uploader::FakeSecretsUploader;
#[allow(unused_imports)]
pub use fixtures::{SYSTEM_ENV, deploy_config, with_production};
#[allow(unused_imports)]
pub use memory_filesystem::MemoryFilesystem;
#[allow(unused_imports)]
pub use recording_reporter::RecordingReporter;
#[allow(unused_imports)]
pub use scripted_prompt::ScriptedPrompt;
