use super::line::Line;
use super::renderable::{Fit, Renderable};
use crate::units::Pt;
use crate::LayoutError;

/// Given a maximum width, turns a list of renderables into a list of fixed-item lines.
///
/// Each line may hold pieces of several renderables, all sharing one baseline. Lines are
/// filled greedily in a single pass:
///
/// ```text
/// start a new line
/// for each renderable
///   while the renderable has more content
///     if the current line is empty
///       add get_something(max_width) to it
///     else if get_if_fits(max_width - line width) gives something
///       add it to the current line
///     else
///       finish the current line and start a new one
/// ```
///
/// Order is preserved and no line is wider than `max_width`, except a line whose only
/// content is a single fragment that was already too wide on its own.
///
/// Returns [LayoutError::InvalidWidth] if `max_width` isn't a positive number.
pub fn renderables_to_lines<'a>(
    items: &[&'a dyn Renderable],
    max_width: Pt,
) -> Result<Vec<Line<'a>>, LayoutError> {
    if !max_width.is_positive() {
        return Err(LayoutError::InvalidWidth(max_width));
    }

    let mut lines: Vec<Line<'a>> = Vec::new();
    let mut line: Line<'a> = Line::new();

    for &item in items {
        let mut rtor = item.renderator();
        while rtor.has_more() {
            if line.is_empty() {
                line.append(rtor.get_something(max_width));
            } else {
                match rtor.get_if_fits(max_width - line.width()) {
                    Fit::Fits(fi) => {
                        line.append(fi);
                    }
                    Fit::DoesNotFit => {
                        log::trace!(
                            "line {} full at {} of {max_width}",
                            lines.len(),
                            line.width()
                        );
                        lines.push(std::mem::take(&mut line));
                    }
                }
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    log::debug!(
        "laid out {} renderables in {} lines of at most {max_width}",
        items.len(),
        lines.len()
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FixedItem, InlineBox, Renderator};
    use pretty_assertions::assert_eq;

    fn widths(lines: &[Line]) -> Vec<Vec<f32>> {
        lines
            .iter()
            .map(|line| line.items().iter().map(|fi| *fi.width()).collect())
            .collect()
    }

    fn boxes(widths: &[f32]) -> Vec<InlineBox> {
        widths
            .iter()
            .map(|&w| InlineBox::new(Pt(w), Pt(10.0)))
            .collect()
    }

    fn lay_out(widths: &[f32], max_width: f32) -> Vec<Vec<f32>> {
        let boxes = boxes(widths);
        let items: Vec<&dyn Renderable> = boxes.iter().map(|b| b as &dyn Renderable).collect();
        let lines = renderables_to_lines(&items, Pt(max_width)).expect("can lay out");
        self::widths(&lines)
    }

    #[test]
    fn each_fragment_that_does_not_fit_starts_a_line() {
        assert_eq!(
            lay_out(&[30.0, 40.0, 50.0], 60.0),
            vec![vec![30.0], vec![40.0], vec![50.0]]
        );
    }

    #[test]
    fn fills_lines_as_far_as_they_go() {
        assert_eq!(
            lay_out(&[10.0, 10.0, 10.0, 10.0], 25.0),
            vec![vec![10.0, 10.0], vec![10.0, 10.0]]
        );
        assert_eq!(
            lay_out(&[10.0, 15.0, 25.0, 5.0, 20.0], 25.0),
            vec![vec![10.0, 15.0], vec![25.0], vec![5.0, 20.0]]
        );
    }

    #[test]
    fn oversized_fragment_gets_a_line_of_its_own() {
        assert_eq!(lay_out(&[1000.0], 100.0), vec![vec![1000.0]]);
        assert_eq!(
            lay_out(&[20.0, 1000.0, 20.0], 100.0),
            vec![vec![20.0], vec![1000.0], vec![20.0]]
        );
    }

    #[test]
    fn zero_width_fragments_stay_on_the_line() {
        assert_eq!(
            lay_out(&[60.0, 0.0, 0.0, 10.0], 60.0),
            vec![vec![60.0, 0.0, 0.0], vec![10.0]]
        );
        assert_eq!(lay_out(&[200.0, 0.0], 100.0), vec![vec![200.0, 0.0]]);
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert!(lay_out(&[], 100.0).is_empty());

        struct Empty;
        struct EmptyRenderator;
        impl<'a> Renderator<'a> for EmptyRenderator {
            fn has_more(&self) -> bool {
                false
            }
            fn get_something(&mut self, _max_width: Pt) -> FixedItem<'a> {
                unreachable!("never asked")
            }
            fn get_if_fits(&mut self, _remaining_width: Pt) -> Fit<'a> {
                unreachable!("never asked")
            }
        }
        impl Renderable for Empty {
            fn renderator(&self) -> Box<dyn Renderator<'_> + '_> {
                Box::new(EmptyRenderator)
            }
        }

        let items: [&dyn Renderable; 2] = [&Empty, &Empty];
        let lines = renderables_to_lines(&items, Pt(10.0)).expect("can lay out");
        assert!(lines.is_empty());
    }

    #[test]
    fn rejects_unusable_widths() {
        let boxes = boxes(&[10.0]);
        let items: Vec<&dyn Renderable> = boxes.iter().map(|b| b as &dyn Renderable).collect();
        for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                renderables_to_lines(&items, Pt(width)),
                Err(LayoutError::InvalidWidth(_))
            ));
        }
    }
}
