use crate::peg_state::PegState;

#[derive(Default)]
pub struct LayoutPrinter {
  pub show_colours: bool,
}

impl LayoutPrinter {
  pub fn new(show_colours: bool) -> Self {
    Self { show_colours }
  }

  /// # Example output:
  ///
  /// ```text
  /// 1 H | 13 12
  /// 2   | 11
  /// 3   |
  /// ...
  /// 8 H |
  /// ```
  ///
  /// Disks are listed bottom to top; with colours on each rank is followed by its `#RRGGBB`.
  pub fn render(&self, state: &PegState) -> String {
    let mut out = String::new();
    for (peg, stack) in state.iter() {
      let tag = if peg.is_home() { "H" } else { " " };
      out.push_str(&format!("{peg} {tag} |"));
      for disk in stack {
        if self.show_colours {
          out.push_str(&format!(" {}{}", disk.rank, disk.colour));
        } else {
          out.push_str(&format!(" {}", disk.rank));
        }
      }
      out.push('\n');
    }
    out
  }

  pub fn pretty_print(&self, state: &PegState) {
    print!("{}", self.render(state));
  }
}

#[cfg(test)]
mod tests {
  use crate::disk_palette::DiskColour;
  use crate::hop::Hop;
  use crate::peg::Peg;
  use crate::peg_state::Disk;

  use super::*;

  #[test]
  fn test_render_plain() {
    let state = PegState::from_layout_code("2").unwrap();
    let hops = [Hop::new(Peg::new(1).unwrap(), Peg::new(2).unwrap())];
    let state = state.apply_prefix(&hops, 1).unwrap();

    let rendered = LayoutPrinter::default().render(&state);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "1 H | 12");
    assert_eq!(lines[1], "2   | 11");
    assert_eq!(lines[2], "3   |");
    assert_eq!(lines[7], "8 H |");
  }

  #[test]
  fn test_render_with_colours() {
    let state = PegState::from_layout_code("1").unwrap();
    let colour: DiskColour = state.stack(Peg::new(1).unwrap())[0].colour;
    let rendered = LayoutPrinter::new(true).render(&state);
    assert!(rendered.starts_with(&format!("1 H | 11{colour}\n")));

    let disk = Disk::new(11, colour);
    assert_eq!(state.top(Peg::new(1).unwrap()), Some(&disk));
  }
}
