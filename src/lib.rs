#![no_std]
mod error;
mod util;
mod vector;

pub use error::{Operation, ZeroLengthError};
pub use vector::{Point, Vector2D};

#[cfg(test)]
mod tests {

    use crate::{Operation, Vector2D, ZeroLengthError};

    fn init_logs() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    fn heading(from: (f64, f64), to: (f64, f64)) -> Result<i32, ZeroLengthError> {
        let direction = Vector2D::from_points(from, to).normalized()?;
        direction.angle()
    }

    #[test]
    fn walk_between_points() {
        init_logs();

        let step = Vector2D::from_points((1., 1.), (4., 5.));
        assert_eq!(step, Vector2D::new(3., 4.));
        assert_eq!(step.length(), 5.);

        let turned = step.rotate(90);
        log::debug!("Rotated {} into {}", step, turned);
        assert_eq!(turned, Vector2D::new(-4., 3.));
        assert_eq!(step.dot(turned), 0.);
        assert_eq!(step.angle_between(turned), Ok(90));

        let doubled = step * 2. + turned - turned;
        assert_eq!(doubled, Vector2D::new(6., 8.));
    }

    #[test]
    fn errors_propagate_through_question_mark() {
        init_logs();

        assert_eq!(heading((0., 0.), (0., 3.)), Ok(0));
        assert_eq!(heading((2., 2.), (5., 2.)), Ok(90));
        assert_eq!(
            heading((2., 2.), (2., 2.)),
            Err(ZeroLengthError::new(Operation::Normalize))
        );
    }
}
