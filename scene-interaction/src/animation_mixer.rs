/// A named, looping animation of a fixed length.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// The name the clip is looked up by
    pub name: String,
    /// Length of the clip in seconds
    pub duration: f32,
}

impl AnimationClip {
    /// Create a new clip
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Playback state of a single clip inside an [`AnimationMixer`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClipAction {
    clip: AnimationClip,
    time: f32,
    weight: f32,
    playing: bool,
}

impl ClipAction {
    fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            time: 0.,
            weight: 1.,
            playing: false,
        }
    }

    /// The clip this action plays
    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    /// Start advancing this action when the mixer updates
    pub fn play(&mut self) -> &mut Self {
        self.playing = true;
        self
    }

    /// Stop and rewind
    pub fn stop(&mut self) -> &mut Self {
        self.playing = false;
        self.time = 0.;
        self
    }

    /// Is the action playing?
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Set the weight this action contributes to the blend. Stored as given; negative values
    /// are kept so callers can read back what they wrote.
    pub fn set_effective_weight(&mut self, weight: f32) -> &mut Self {
        self.weight = weight;
        self
    }

    /// The weight as last set
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// The weight actually used when blending. Negative contributions count as zero.
    pub fn effective_weight(&self) -> f32 {
        self.weight.max(0.)
    }

    /// Local time within the clip, in seconds
    pub fn time(&self) -> f32 {
        self.time
    }

    fn advance(&mut self, delta: f32) {
        if !self.playing {
            return;
        }

        if self.clip.duration > 0. {
            self.time = (self.time + delta).rem_euclid(self.clip.duration);
        } else {
            self.time = 0.;
        }
    }
}

/// Plays a set of clips at once, each with its own weight.
///
/// Actions are kept in registration order and looked up by clip name; registering a clip with
/// a name that is already present returns the existing action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationMixer {
    actions: Vec<ClipAction>,
}

impl AnimationMixer {
    /// Get the action for `clip`, registering it if this is the first time it's been seen
    pub fn clip_action(&mut self, clip: &AnimationClip) -> &mut ClipAction {
        let index = match self.actions.iter().position(|a| a.clip.name == clip.name) {
            Some(index) => index,
            None => {
                self.actions.push(ClipAction::new(clip.clone()));
                self.actions.len() - 1
            }
        };

        &mut self.actions[index]
    }

    /// Look up an action by clip name
    pub fn action(&self, name: &str) -> Option<&ClipAction> {
        self.actions.iter().find(|a| a.clip.name == name)
    }

    /// Look up an action by clip name
    pub fn action_mut(&mut self, name: &str) -> Option<&mut ClipAction> {
        self.actions.iter_mut().find(|a| a.clip.name == name)
    }

    /// All registered actions
    pub fn actions(&self) -> impl Iterator<Item = &ClipAction> {
        self.actions.iter()
    }

    /// All registered actions
    pub fn actions_mut(&mut self) -> impl Iterator<Item = &mut ClipAction> {
        self.actions.iter_mut()
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Have no actions been registered?
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Advance every playing action by `delta` seconds
    pub fn update(&mut self, delta: f32) {
        for action in self.actions.iter_mut() {
            action.advance(delta);
        }
    }
}
