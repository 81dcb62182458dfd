//! Plain-text rendering of the report sections.

use crate::report::labels::{
    angle_name, aspect_name, body_name, point_name, sect_label, sect_status_label, sign_name,
};
use crate::report::types::{HeaderSection, PositionsSection, Report, Section};
use crate::aspects::Aspect;
use crate::chart::AnglePlacement;
use crate::houses::HouseStrength;
use crate::western::dignities::DignityScore;
use std::fmt;

fn rule() -> String {
    "-".repeat(60)
}

impl Section {
    /// Rendered lines of this section, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Section::Header(header) => header_lines(header),
            Section::Positions(positions) => position_lines(positions),
            Section::Dignities(scores) => dignity_lines(scores),
            Section::Houses(houses) => house_lines(houses),
            Section::Aspects(aspects) => aspect_lines(aspects),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.sections.iter().flat_map(Section::lines).collect();
        f.write_str(&lines.join("\n"))
    }
}

fn header_lines(header: &HeaderSection) -> Vec<String> {
    vec![
        "【AI鑑定用 詳細データ】".to_string(),
        format!("お名前: {}", header.name),
        format!("生年月日: {}", header.birth.format("%Y/%m/%d %H:%M")),
        format!("チャート区分: {}", sect_label(header.sect)),
        rule(),
    ]
}

fn position_lines(positions: &PositionsSection) -> Vec<String> {
    let mut lines = vec!["【データ1: 天体位置・アングル】".to_string()];

    for row in &positions.bodies {
        let pos = &row.placement.position;
        let retro = if row.placement.retrograde { " (R)" } else { "" };
        lines.push(format!(
            "{:<6}: {} {:02}度{:02}分{} (第{}ハウス) / {} 【360度:{}度{:02}分】",
            body_name(row.placement.body),
            sign_name(pos.sign),
            pos.whole_degrees(),
            pos.arc_minutes(),
            retro,
            row.placement.house,
            sect_status_label(row.sect_status),
            pos.absolute_whole_degrees(),
            pos.arc_minutes(),
        ));
    }

    lines.push(angle_line(&positions.ascendant));
    lines.push(angle_line(&positions.midheaven));

    let pof = &positions.part_of_fortune;
    lines.push(format!(
        "{:<6}: {} {:02}度 (第{}ハウス)",
        "POF",
        sign_name(pof.position.sign),
        pof.position.whole_degrees(),
        pof.house,
    ));
    lines.push(rule());
    lines
}

fn angle_line(angle: &AnglePlacement) -> String {
    format!(
        "{:<6}: {} {:02}度 (第{}ハウス) 【360度:{}度00分】",
        angle_name(angle.angle),
        sign_name(angle.position.sign),
        angle.position.whole_degrees(),
        angle.house,
        angle.position.absolute_whole_degrees(),
    )
}

fn dignity_lines(scores: &[DignityScore]) -> Vec<String> {
    let mut lines = vec![String::new(), "【データ2: ディグニティ(惑星の強さ)】".to_string()];
    for (i, score) in scores.iter().enumerate() {
        let initial: String = sign_name(score.sign).chars().take(1).collect();
        lines.push(format!(
            "{:<2}| {:<6}| {} {:02}度 | {:+} | {}",
            i + 1,
            body_name(score.body),
            initial,
            score.degree_in_sign.floor() as u32,
            score.score,
            score.trace(),
        ));
    }
    lines.push(rule());
    lines
}

fn house_lines(houses: &[HouseStrength]) -> Vec<String> {
    let mut lines = vec![String::new(), "【データ3: ハウス・ストレングス (Whole Sign)】".to_string()];
    for house in houses {
        lines.push(format!(
            "House{:<2}: {:<10} (支配星:{}) -> {}",
            house.house,
            house.theme,
            body_name(house.ruler),
            house.rank,
        ));
    }
    lines.push(rule());
    lines
}

fn aspect_lines(aspects: &[Aspect]) -> Vec<String> {
    let mut lines = vec![String::new(), "【■ 主要アスペクト】".to_string()];
    for aspect in aspects {
        lines.push(format!(
            "{}(第{}ハウス) x {}(第{}ハウス) : {} (誤差{:.1})",
            point_name(aspect.from.point),
            aspect.from.house,
            point_name(aspect.to.point),
            aspect.to.house,
            aspect_name(aspect.aspect.kind),
            aspect.aspect.orb,
        ));
    }
    lines
}
