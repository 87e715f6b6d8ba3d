#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub seq: u64,
}

/// Transient messages shown above the current screen.
///
/// One slot per kind; a new message replaces the previous one of the same
/// kind. Clearing is keyed by sequence number so a late timer cannot remove
/// a message it was not scheduled for.
#[derive(Debug, Default)]
pub struct Banners {
    success: Option<Banner>,
    error: Option<Banner>,
    next_seq: u64,
}

impl Banners {
    pub fn show(&mut self, kind: BannerKind, message: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let banner = Banner {
            kind,
            message: message.into(),
            seq: self.next_seq,
        };
        *self.slot_mut(kind) = Some(banner);
        self.next_seq
    }

    /// Removes the banner of `kind` if it is still the one numbered `seq`.
    pub fn clear(&mut self, kind: BannerKind, seq: u64) -> bool {
        let slot = self.slot_mut(kind);
        if slot.as_ref().is_some_and(|banner| banner.seq == seq) {
            *slot = None;
            return true;
        }
        false
    }

    #[cfg(test)]
    pub fn get(&self, kind: BannerKind) -> Option<&Banner> {
        match kind {
            BannerKind::Success => self.success.as_ref(),
            BannerKind::Error => self.error.as_ref(),
        }
    }

    /// Visible banners, success first.
    pub fn iter(&self) -> impl Iterator<Item = &Banner> {
        self.success.iter().chain(self.error.iter())
    }

    fn slot_mut(&mut self, kind: BannerKind) -> &mut Option<Banner> {
        match kind {
            BannerKind::Success => &mut self.success,
            BannerKind::Error => &mut self.error,
        }
    }
}
