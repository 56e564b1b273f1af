//! 背景アニメーション（漂う葉）
//!
//! ワークフローとは状態を共有しない装飾用シミュレーション。
//! `mount` でフレームループを開始し、`unmount` で停止して資源を解放する。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

/// 葉の枚数
pub const LEAF_COUNT: usize = 20;

/// 縦方向の折り返し位置
const WRAP_Y: f64 = 10.0;

/// 既定のフレーム間隔（約60fps）
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// 1枚の葉
#[derive(Debug, Clone, PartialEq)]
pub struct LeafSprite {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rotation: f64,
    /// 1フレームあたりの回転量
    pub rotation_speed: f64,
    /// 1フレームあたりの縦移動量
    pub drift_speed: f64,
    /// HSL
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub opacity: f64,
}

impl LeafSprite {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: (rng.gen::<f64>() - 0.5) * 20.0,
            y: (rng.gen::<f64>() - 0.5) * 20.0,
            z: (rng.gen::<f64>() - 0.5) * 10.0,
            rotation: rng.gen::<f64>() * std::f64::consts::PI,
            rotation_speed: (rng.gen::<f64>() - 0.5) * 0.02,
            drift_speed: (rng.gen::<f64>() - 0.5) * 0.01,
            hue: 0.25 + rng.gen::<f64>() * 0.1,
            saturation: 0.6,
            lightness: 0.4 + rng.gen::<f64>() * 0.3,
            opacity: 0.6,
        }
    }

    fn step(&mut self) {
        self.rotation += self.rotation_speed;
        self.y += self.drift_speed;

        if self.y > WRAP_Y {
            self.y = -WRAP_Y;
        }
        if self.y < -WRAP_Y {
            self.y = WRAP_Y;
        }
    }
}

/// 葉の集合とビューポート
#[derive(Debug, Clone)]
pub struct LeafField {
    leaves: Vec<LeafSprite>,
    aspect: f64,
}

impl LeafField {
    pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Self {
        Self {
            leaves: (0..count).map(|_| LeafSprite::random(rng)).collect(),
            aspect: 16.0 / 9.0,
        }
    }

    pub fn from_leaves(leaves: Vec<LeafSprite>) -> Self {
        Self {
            leaves,
            aspect: 16.0 / 9.0,
        }
    }

    /// 1フレーム進める
    pub fn step(&mut self) {
        self.leaves.iter_mut().for_each(LeafSprite::step);
    }

    pub fn leaves(&self) -> &[LeafSprite] {
        &self.leaves
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// 画面サイズ変更
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f64 / height as f64;
        }
    }
}

/// 実行中の背景アニメーション
pub struct Backdrop {
    field: Arc<Mutex<LeafField>>,
    frames: Arc<AtomicU64>,
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Backdrop {
    /// フレームループを開始（tokioランタイム内で呼ぶこと）
    pub fn mount(seed: Option<u64>, frame_interval: Duration) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::mount_field(LeafField::scatter(LEAF_COUNT, &mut rng), frame_interval)
    }

    pub fn mount_field(field: LeafField, frame_interval: Duration) -> Self {
        let field = Arc::new(Mutex::new(field));
        let frames = Arc::new(AtomicU64::new(0));
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = {
            let field = Arc::clone(&field);
            let frames = Arc::clone(&frames);
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(frame_interval);
                ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                loop {
                    tokio::select! {
                        _ = &mut stop_rx => break,
                        _ = ticker.tick() => {
                            field.lock().unwrap_or_else(PoisonError::into_inner).step();
                            frames.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        };

        debug!(interval_ms = frame_interval.as_millis() as u64, "背景アニメーション開始");
        Self {
            field,
            frames,
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    /// 描画済みフレーム数
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    /// 現在の葉の状態
    pub fn snapshot(&self) -> Vec<LeafSprite> {
        self.field
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .leaves()
            .to_vec()
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.field
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set_viewport(width, height);
    }

    pub fn aspect(&self) -> f64 {
        self.field.lock().unwrap_or_else(PoisonError::into_inner).aspect()
    }

    /// 停止してループ終了を待つ。描画フレーム数を返す。
    pub async fn unmount(mut self) -> u64 {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        let frames = self.frames();
        debug!(frames, "背景アニメーション停止");
        frames
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        // unmountされずに破棄された場合はループを中止
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(y: f64, drift_speed: f64) -> LeafSprite {
        LeafSprite {
            x: 0.0,
            y,
            z: 0.0,
            rotation: 0.0,
            rotation_speed: 0.01,
            drift_speed,
            hue: 0.3,
            saturation: 0.6,
            lightness: 0.5,
            opacity: 0.6,
        }
    }

    #[test]
    fn test_scatter_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = LeafField::scatter(LEAF_COUNT, &mut rng);
        assert_eq!(field.leaves().len(), LEAF_COUNT);

        for l in field.leaves() {
            assert!((-10.0..10.0).contains(&l.x));
            assert!((-10.0..10.0).contains(&l.y));
            assert!((-5.0..5.0).contains(&l.z));
            assert!((0.25..0.35).contains(&l.hue));
            assert!((0.4..0.7).contains(&l.lightness));
            assert!(l.rotation_speed.abs() <= 0.01);
            assert!(l.drift_speed.abs() <= 0.005);
        }
    }

    #[test]
    fn test_step_wraps_vertically() {
        let mut field = LeafField::from_leaves(vec![leaf(9.995, 0.01), leaf(-9.995, -0.01)]);
        field.step();

        assert_eq!(field.leaves()[0].y, -10.0);
        assert_eq!(field.leaves()[1].y, 10.0);
        assert!((field.leaves()[0].rotation - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_set_viewport() {
        let mut field = LeafField::from_leaves(vec![]);
        field.set_viewport(800, 400);
        assert_eq!(field.aspect(), 2.0);
        field.set_viewport(800, 0);
        assert_eq!(field.aspect(), 2.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_and_unmount() {
        let backdrop = Backdrop::mount(Some(3), Duration::from_millis(10));
        let before = backdrop.snapshot();

        tokio::time::sleep(Duration::from_millis(55)).await;
        assert!(backdrop.frames() >= 5);
        assert_ne!(backdrop.snapshot(), before);

        backdrop.resize(1920, 1080);
        assert!((backdrop.aspect() - 16.0 / 9.0).abs() < 1e-12);

        let frames = backdrop.unmount().await;
        assert!(frames >= 5);
    }
}
