use crate::core::Video;

/// Share of the element that must stay in view for playback to continue.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCommand {
    None,
    Pause,
}

/// Playback state of one on-page video with its visibility observer. The
/// observer lives exactly as long as the element.
#[derive(Debug, Clone, Default)]
pub struct AutoPauseVideo {
    playing: bool,
    observing: bool,
}

impl AutoPauseVideo {
    /// Registers the observer when the element is mounted.
    pub fn mount() -> Self {
        Self { playing: false, observing: true }
    }

    pub fn unmount(&mut self) {
        self.observing = false;
        self.playing = false;
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Visibility callback. Leaving the viewport while playing pauses; coming
    /// back never resumes on its own.
    pub fn on_visibility_change(&mut self, visible_ratio: f64) -> VideoCommand {
        if self.observing && self.playing && visible_ratio < VISIBILITY_THRESHOLD {
            self.playing = false;
            VideoCommand::Pause
        } else {
            VideoCommand::None
        }
    }
}

/// How a showcase entry is drawn. GIFs are plain images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseMedia {
    Image,
    Video,
}

impl ShowcaseMedia {
    pub fn for_video(video: &Video) -> Self {
        if video.is_gif() {
            ShowcaseMedia::Image
        } else {
            ShowcaseMedia::Video
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pauses_only_when_playing_and_leaving_view() {
        let mut video = AutoPauseVideo::mount();
        assert_eq!(video.on_visibility_change(0.1), VideoCommand::None);

        video.play();
        assert_eq!(video.on_visibility_change(0.8), VideoCommand::None);
        assert_eq!(video.on_visibility_change(0.2), VideoCommand::Pause);
        assert!(!video.is_playing());

        // scrolling back does not restart playback
        assert_eq!(video.on_visibility_change(1.0), VideoCommand::None);
        assert!(!video.is_playing());
    }

    #[test]
    fn unmounted_videos_ignore_visibility() {
        let mut video = AutoPauseVideo::mount();
        video.play();
        video.unmount();
        assert!(!video.is_observing());
        assert_eq!(video.on_visibility_change(0.0), VideoCommand::None);
    }

    #[test]
    fn gifs_render_as_images() {
        let mut video: Video = serde_json::from_str(r#"{"src": "/videos/logo.GIF", "title": "Logo"}"#).unwrap();
        assert_eq!(ShowcaseMedia::for_video(&video), ShowcaseMedia::Image);
        video.src = "/videos/logo.mp4".to_string();
        assert_eq!(ShowcaseMedia::for_video(&video), ShowcaseMedia::Video);
    }
}
