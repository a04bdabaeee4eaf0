/// Collects every error found while parsing a record so they are all
/// reported in one compile pass.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    combined: Option<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn push(&mut self, err: syn::Error) {
        match &mut self.combined {
            Some(combined) => combined.combine(err),
            None => self.combined = Some(err),
        }
    }

    /// Returns the value of `res`, recording the error instead when it
    /// failed.
    pub(crate) fn check<T>(&mut self, res: syn::Result<T>) -> Option<T> {
        res.map_err(|err| self.push(err)).ok()
    }

    pub(crate) fn finish(self) -> syn::Result<()> {
        self.combined.map_or(Ok(()), Err)
    }
}
