mod client;
mod resources;
mod walk;

pub use client::FilesClient;
pub use resources::metadata::{
    DbxPath, DeletedMetadata, FileMetadata, FolderMetadata, GetMetadataRequest,
    ListFolderContinueRequest, ListFolderRequest, ListFolderResult, Metadata,
};
pub use walk::{format_date, print_tree, readable_size, FolderSource};
