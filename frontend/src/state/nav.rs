#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, offset: f64, header_offset: f64) -> bool {
        let start = self.top - header_offset;
        offset >= start && offset < start + self.height
    }
}

pub fn section_at<'a>(
    sections: &'a [SectionBounds],
    offset: f64,
    header_offset: f64,
) -> Option<&'a SectionBounds> {
    sections.iter().find(|s| s.contains(offset, header_offset))
}

// Between sections the previous highlight is kept
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NavHighlight {
    active: Option<String>,
}

impl NavHighlight {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn update(
        &mut self,
        sections: &[SectionBounds],
        offset: f64,
        header_offset: f64,
    ) -> Option<&str> {
        let hit = section_at(sections, offset, header_offset)?;
        if self.active.as_deref() != Some(hit.id.as_str()) {
            self.active = Some(hit.id.clone());
        }
        self.active.as_deref()
    }
}
