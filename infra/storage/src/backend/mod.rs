mod disk;
mod memory;

pub(crate) use disk::DiskBackend;
pub(crate) use memory::MemoryBackend;

/// Where a [`Storage`](crate::Storage) keeps its bytes.
#[derive(Debug)]
pub(crate) enum Backend {
    Disk(DiskBackend),
    Memory(MemoryBackend),
}
