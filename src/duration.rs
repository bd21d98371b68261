use crate::history::Transition;
use crate::{Error, Result};
use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// ステータス名から滞在時間（指定単位）へのマップ
pub type StatusDurations = HashMap<String, f64>;

/// 滞在時間の出力単位
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Milliseconds,
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl TimeUnit {
    /// 1単位あたりの秒数
    pub fn seconds_per_unit(&self) -> f64 {
        match self {
            TimeUnit::Milliseconds => 0.001,
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3_600.0,
            TimeUnit::Days => 86_400.0,
            TimeUnit::Weeks => 604_800.0,
        }
    }

    /// 期間をこの単位の数値に変換
    ///
    /// マイクロ秒精度で変換する。マイクロ秒でi64に収まらない長さはミリ秒精度。
    pub fn convert(&self, duration: Duration) -> f64 {
        let seconds = match duration.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            None => duration.num_milliseconds() as f64 / 1000.0,
        };
        seconds / self.seconds_per_unit()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ms" | "millisecond" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "s" | "sec" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "min" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hour" | "hours" => Ok(TimeUnit::Hours),
            "d" | "day" | "days" => Ok(TimeUnit::Days),
            "w" | "week" | "weeks" => Ok(TimeUnit::Weeks),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}

/// 週末として扱う曜日（UTCの暦日で判定）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekendPolicy {
    pub days: [Weekday; 2],
}

impl WeekendPolicy {
    pub fn new(first: Weekday, second: Weekday) -> Self {
        Self {
            days: [first, second],
        }
    }

    pub fn is_weekend(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// 区間内の週末日数を数える
    ///
    /// `start`, `start + 1日`, ... のうち`end`以下の各時点の曜日を判定する。
    /// 途中で遷移した日も丸1日として数えるため、短い区間では
    /// 差し引き後の時間が負になりうる。
    pub fn weekend_days_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
        if end < start {
            return 0;
        }

        // 判定対象の時点の数
        let points = (end - start).num_days() + 1;
        let per_week = (0..7)
            .scan(start.weekday(), |day, _| {
                let current = *day;
                *day = day.succ();
                Some(current)
            })
            .filter(|day| self.is_weekend(*day))
            .count() as i64;

        let mut count = points / 7 * per_week;
        let mut day = start.weekday();
        for _ in 0..points % 7 {
            if self.is_weekend(day) {
                count += 1;
            }
            day = day.succ();
        }

        count
    }
}

impl Default for WeekendPolicy {
    fn default() -> Self {
        Self::new(Weekday::Sat, Weekday::Sun)
    }
}

/// ステータス遷移列からステータス別の滞在時間を集計する
#[derive(Debug, Clone, Default)]
pub struct DurationAggregator {
    weekend_policy: WeekendPolicy,
    require_transitions: bool,
}

impl DurationAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 週末の曜日を設定
    pub fn weekend_policy(mut self, policy: WeekendPolicy) -> Self {
        self.weekend_policy = policy;
        self
    }

    /// 遷移が1件もない場合にエラーとするか
    pub fn require_transitions(mut self, required: bool) -> Self {
        self.require_transitions = required;
        self
    }

    /// ステータス別の滞在時間を単位変換前の`Duration`で集計
    ///
    /// 遷移列はソート済みであることを前提とし、並べ替えは行わない。
    /// 各遷移の区間は次の遷移まで、最後の遷移は`now`までを`to`ステータスに加算する。
    pub fn attribute(
        &self,
        transitions: &[Transition],
        include_weekends: bool,
        now: DateTime<Utc>,
    ) -> Result<HashMap<String, Duration>> {
        if transitions.is_empty() && self.require_transitions {
            return Err(Error::EmptyTimeline);
        }

        let mut totals: HashMap<String, Duration> = HashMap::new();

        for (index, transition) in transitions.iter().enumerate() {
            let start = transition.timestamp;
            let end = transitions
                .get(index + 1)
                .map(|next| next.timestamp)
                .unwrap_or(now);

            let mut elapsed = end - start;
            if !include_weekends {
                let weekend_days = self.weekend_policy.weekend_days_between(start, end);
                elapsed = elapsed - Duration::days(weekend_days);
            }

            let total = totals.entry(transition.to.clone()).or_insert_with(Duration::zero);
            *total = *total + elapsed;
        }

        Ok(totals)
    }

    /// ステータス別の滞在時間を指定単位で集計
    pub fn aggregate(
        &self,
        transitions: &[Transition],
        unit: TimeUnit,
        include_weekends: bool,
        now: DateTime<Utc>,
    ) -> Result<StatusDurations> {
        let totals = self.attribute(transitions, include_weekends, now)?;

        Ok(totals
            .into_iter()
            .map(|(status, duration)| (status, unit.convert(duration)))
            .collect())
    }
}

/// デフォルト設定（土日を週末とする）で滞在時間を集計
///
/// `unit`は`"seconds"`, `"minutes"`, `"hours"`, `"days"`などの文字列で指定する。
pub fn aggregate_durations(
    transitions: &[Transition],
    unit: &str,
    include_weekends: bool,
    now: DateTime<Utc>,
) -> Result<StatusDurations> {
    let unit = unit.parse::<TimeUnit>()?;
    DurationAggregator::new().aggregate(transitions, unit, include_weekends, now)
}
