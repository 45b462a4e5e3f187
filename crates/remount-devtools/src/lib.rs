use web_time::Instant;

use remount_core::{MountArena, MountHandle, MountRecord};

/// Counts over every record in an arena at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MountStats {
    pub records: usize,
    pub mounted: usize,
    pub bound: usize,
    pub accessible: usize,
    pub with_wrapper: usize,
    pub with_node_info: usize,
    pub with_view_node_info: usize,
}

impl MountStats {
    pub fn capture(arena: &MountArena) -> Self {
        let mut s = MountStats {
            records: arena.len(),
            ..Default::default()
        };
        for (_, r) in arena.iter() {
            if !r.is_mounted() {
                continue;
            }
            s.mounted += 1;
            s.bound += r.is_bound() as usize;
            s.accessible += r.is_accessible() as usize;
            s.with_wrapper += r.display_list_wrapper().is_some() as usize;
            s.with_node_info += r.node_info().is_some() as usize;
            s.with_view_node_info += r.view_node_info().is_some() as usize;
        }
        s
    }

    pub fn summary(&self) -> String {
        [
            format!("records: {}", self.records),
            format!("mounted: {}", self.mounted),
            format!("bound: {}", self.bound),
            format!("accessible: {}", self.accessible),
            format!("wrappers: {}", self.with_wrapper),
            format!("node info: {}", self.with_node_info),
        ]
        .join("  |  ")
    }
}

/// One-line description of a record for the inspector.
pub fn describe_record(record: &MountRecord) -> String {
    let Some(component) = record.component() else {
        return "pooled".to_string();
    };
    format!(
        "{}#{} flags={:#06b} a11y={:?}{}",
        component.behavior().name(),
        component.id,
        record.flags().bits(),
        record.important_for_accessibility(),
        if record.is_bound() { " bound" } else { "" },
    )
}

pub struct Hud {
    pub inspector_enabled: bool,
    pub highlighted: Option<MountHandle>,
    pass_count: u64,
    last_pass: Option<Instant>,
    rate_smooth: f32,
    pub stats: Option<MountStats>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            inspector_enabled: false,
            highlighted: None,
            pass_count: 0,
            last_pass: None,
            rate_smooth: 0.0,
            stats: None,
        }
    }
    pub fn toggle_inspector(&mut self) {
        self.inspector_enabled = !self.inspector_enabled;
    }
    pub fn set_highlighted(&mut self, h: Option<MountHandle>) {
        self.highlighted = h;
    }

    pub fn pass_count(&self) -> u64 {
        self.pass_count
    }

    /// Mount passes per second, smoothed.
    pub fn pass_rate(&self) -> f32 {
        self.rate_smooth
    }

    pub fn record_pass(&mut self, stats: MountStats) {
        self.pass_count += 1;
        let now = Instant::now();
        if let Some(prev) = self.last_pass.replace(now) {
            let dt = (now - prev).as_secs_f32();
            if dt > 0.0 {
                let rate = 1.0 / dt;
                // simple EMA
                let a = 0.2;
                self.rate_smooth = if self.rate_smooth == 0.0 {
                    rate
                } else {
                    (1.0 - a) * self.rate_smooth + a * rate
                };
            }
        }
        self.stats = Some(stats);
    }

    pub fn lines(&self, arena: &MountArena) -> Vec<String> {
        let mut lines = vec![
            format!("pass: {}", self.pass_count),
            format!("passes/s: {:.1}", self.rate_smooth),
        ];
        if let Some(s) = &self.stats {
            lines.push(s.summary());
        }
        if let Some(h) = self.highlighted {
            match arena.get(h) {
                Ok(r) => lines.push(describe_record(r)),
                Err(e) => {
                    log::debug!("inspector: {e}");
                    lines.push("highlighted: gone".to_string());
                }
            }
        }
        lines
    }
}

pub struct Inspector {
    pub hud: Hud,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self { hud: Hud::new() }
    }

    /// Call once per mount pass. Returns the overlay text when enabled.
    pub fn frame(&mut self, arena: &MountArena) -> Option<Vec<String>> {
        if !self.hud.inspector_enabled {
            return None;
        }
        self.hud.record_pass(MountStats::capture(arena));
        Some(self.hud.lines(arena))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use remount_core::*;

    use super::*;

    struct Dot;
    impl MountContent for Dot {}

    struct DotBehavior;
    impl Behavior for DotBehavior {
        fn type_key(&self) -> BehaviorKey {
            BehaviorKey(1)
        }
        fn name(&self) -> &str {
            "Dot"
        }
        fn create_content(&self) -> ContentRef {
            Rc::new(Dot)
        }
    }

    const CTX: MountContext = MountContext(0);

    fn populated() -> (MountArena, MountHandle, RecyclePool) {
        let mut pool = RecyclePool::new();
        let mut arena = MountArena::new();
        let dot = || Component::new(1, Rc::new(DotBehavior));
        let r = Rect::new(0.0, 0.0, 4.0, 4.0);

        let plain = LayoutOutput::new(1, r);
        let rich = LayoutOutput::new(2, r)
            .with_flags(MountFlags::DUPLICATE_PARENT_STATE)
            .with_node_info(Descriptor::new(
                NodeInfo::new().on_accessibility(AccessibilityHook::PopulateEvent, || {}),
            ))
            .with_display_list(DisplayList::new(r, vec![DrawOp::PopClip]));

        arena.mount_new(CTX, dot(), HostId(0), &plain, &mut pool);
        let h = arena.mount_new(CTX, dot(), HostId(0), &rich, &mut pool);
        arena.set_bound(h, true).unwrap();
        arena.acquire();
        (arena, h, pool)
    }

    #[test]
    fn test_stats_summary() {
        let (arena, _, _) = populated();
        let stats = MountStats::capture(&arena);
        assert_eq!(stats.with_view_node_info, 0);
        insta::assert_snapshot!(stats.summary(), @"records: 3  |  mounted: 2  |  bound: 1  |  accessible: 1  |  wrappers: 1  |  node info: 1");
    }

    #[test]
    fn test_inspector_only_reports_when_enabled() {
        let (mut arena, h, mut pool) = populated();
        let mut inspector = Inspector::new();
        assert!(inspector.frame(&arena).is_none());
        assert_eq!(inspector.hud.pass_count(), 0);

        inspector.hud.toggle_inspector();
        inspector.hud.set_highlighted(Some(h));
        let lines = inspector.frame(&arena).unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "pass: 1");
        assert_eq!(lines[3], "Dot#1 flags=0b0001 a11y=Auto bound");

        arena.release(h, CTX, &mut pool).unwrap();
        let lines = inspector.frame(&arena).unwrap();
        assert_eq!(lines[3], "highlighted: gone");
        assert_eq!(inspector.hud.stats.unwrap().mounted, 1);
    }

    #[test]
    fn test_describe_pooled_record() {
        assert_eq!(describe_record(&MountRecord::new()), "pooled");
    }
}
