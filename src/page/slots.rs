//! Front/back image ownership
use crate::graphics::bitmap::Bitmap;

/// What the back face shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackFace {
    /// Same image as the front, set through `Side::Both`
    SharedWithFront,
    Own(Bitmap),
}

/// The two image slots of a page.
///
/// The front image is always owned here. The back either owns its own
/// image or is tagged as showing the front one. Replacing a slot drops
/// whatever it held unless the other side still shows it.
#[derive(Debug, Clone)]
pub struct TextureSlots {
    front: Bitmap,
    back: BackFace,
}

impl TextureSlots {
    pub fn new(front: Bitmap, back: Bitmap) -> Self {
        Self {
            front,
            back: BackFace::Own(back),
        }
    }

    pub fn shared(image: Bitmap) -> Self {
        Self {
            front: image,
            back: BackFace::SharedWithFront,
        }
    }

    pub fn front(&self) -> &Bitmap {
        &self.front
    }

    pub fn back(&self) -> &Bitmap {
        match &self.back {
            BackFace::SharedWithFront => &self.front,
            BackFace::Own(image) => image,
        }
    }

    pub fn back_face(&self) -> &BackFace {
        &self.back
    }

    pub fn is_back_distinct(&self) -> bool {
        matches!(self.back, BackFace::Own(_))
    }

    /// A shared image stays with the back side
    pub fn replace_front(&mut self, image: Bitmap) {
        let previous = core::mem::replace(&mut self.front, image);
        if matches!(self.back, BackFace::SharedWithFront) {
            self.back = BackFace::Own(previous);
        }
    }

    pub fn replace_back(&mut self, image: Bitmap) {
        self.back = BackFace::Own(image);
    }

    pub fn replace_both(&mut self, image: Bitmap) {
        self.front = image;
        self.back = BackFace::SharedWithFront;
    }
}
