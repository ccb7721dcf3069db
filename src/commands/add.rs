use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::staging::staging_entry::StagingEntry;
use crate::errors::Error;
use std::path::Path;

impl Repository {
    /// Hash the named files into the store and stage them
    ///
    /// Directory arguments are expanded to every non-ignored file beneath
    /// them. An argument that does not exist on disk fails the whole
    /// operation before anything is staged.
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        let ignore = self.workspace().ignore_list()?;

        let paths = paths
            .iter()
            .map(|path| {
                if !Path::new(path).exists() {
                    return Err(Error::NotFound(format!("path {}", path)).into());
                }

                let absolute_path = Path::new(path).canonicalize()?;
                self.workspace().list_files(Some(absolute_path), &ignore)
            })
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .flatten();

        for path in paths {
            let data = self.workspace().read_file(&path)?;

            let blob = Blob::new(data.into());
            let blob_id = self.database().store(&blob)?;

            index.add(StagingEntry::new(path, blob_id));
        }

        index.write_updates()?;

        Ok(())
    }
}
